//! Module-level numeric tolerance constants.
//!
//! Every component that needs a feasibility or clamp tolerance references these
//! constants instead of redeclaring its own. Diverging constants across the
//! validator, builder, verifier and assembler produced spurious reconciliation
//! warnings in the system this crate is modeled on; keeping one copy here closes
//! that gap for good.

/// Slack the engine (and the independent verifier) allow when declaring a
/// resource, demand, or total bound satisfied.
pub const FEASIBILITY_TOL: f64 = 1e-6;

/// Magnitude below which a reported decision-variable value is clamped to
/// zero in the production plan.
pub const PLAN_CLAMP: f64 = 1e-8;
