//! Error type for the small amount of plumbing outside the request/response
//! path (binding the listener, reading env config). Anything that happens
//! mid-request is represented in the response envelope, never raised here
//! -- see §4.8/§7's "not a transport error" posture for infeasible/unbounded
//! and the handler's own mapping from `ProdMixError` to a 400/500 body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("failed to bind to {0}: {1}")]
    Bind(String, std::io::Error),
}
