//! Error type for the solver adapter.

use thiserror::Error;

/// Errors the adapter itself can raise. Validation and feasibility-verification
/// failures are never represented here -- they travel as structured diagnostics
/// in their own result types, never as an `Err`.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The engine was asked to solve a model with no objective set.
    #[error("model '{0}' has no objective")]
    NoObjective(String),

    /// The underlying engine raised something other than infeasible/unbounded.
    #[error("engine error: {0}")]
    Engine(String),

    /// The caller requested cancellation before or during the solve.
    #[error("cancelled")]
    Cancelled,
}
