//! Crate-level error type. Only used at the pipeline's plumbing edges
//! (registry lookup, JSON decode at the boundary crate) -- validation and
//! solve failures are reported as `ProductionResult` variants, not errors,
//! since they are expected, user-facing outcomes rather than exceptional
//! ones.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProdMixError {
    #[error("unknown optimizer type: {0}")]
    UnknownOptimizer(String),

    #[error("optimizer '{0}' is already registered")]
    DuplicateOptimizer(String),

    #[error("failed to decode request: {0}")]
    Decode(String),
}

pub type ProdMixResult<T> = Result<T, ProdMixError>;
