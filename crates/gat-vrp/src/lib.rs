//! # gat-vrp: capacitated vehicle routing MILP solver
//!
//! Library-shaped entry point (§6.5): given locations, per-location demand,
//! vehicle count, depot index and capacity, builds the MTZ-constrained
//! integer flow model over [`gat_solver_lp`], solves it, and reconstructs
//! each vehicle's route from the binary arc-selection variables. No HTTP
//! surface is required by the design; callers embed [`solve`] directly.

pub mod assembler;
pub mod builder;
pub mod types;
pub mod validator;

pub use types::{DistanceMatrix, Location, Route, VrpRequest, VrpResult, VrpStatus};

use gat_solver_lp::CancellationToken;
use validator::VrpValidationOutcome;

/// Solves one CVRP instance end to end. A semantically invalid instance
/// (e.g. total demand exceeding fleet capacity) never reaches the model
/// builder -- it reports an `Error` status carrying the validation messages,
/// since §6.5's result schema has no separate `validation_error` status.
pub fn solve(
    locations: Vec<Location>,
    demands: Vec<f64>,
    num_vehicles: usize,
    depot_index: usize,
    capacity: f64,
    cancel: &CancellationToken,
) -> VrpResult {
    let req = match validator::validate(locations, demands, num_vehicles, depot_index, capacity) {
        VrpValidationOutcome::Invalid(errors) => {
            return VrpResult::error(errors.join("; "));
        }
        VrpValidationOutcome::Valid(req) => req,
    };

    let dist = DistanceMatrix::compute(&req.locations);
    let model = builder::build(&req, &dist);
    let outcome = gat_solver_lp::solve(&model, cancel);
    assembler::assemble(&req, &dist, outcome)
}
