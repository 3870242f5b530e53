//! Request routing and status mapping (C8, §4.8/§6.1-§6.3).
//!
//! `POST /optimize/{optimizer_type}` and its two legacy aliases all funnel
//! through [`dispatch`]; only the optimizer id they dispatch to differs.
//! Each solve runs on a blocking thread pool task (§5) so a long-running
//! solve never blocks the async reactor serving other requests.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use gat_prodmix::input::ProductionRequestInput;
use gat_prodmix::types::{ProductionResult, ProductionStatus};
use gat_prodmix::ProdMixError;
use gat_solver_lp::CancellationToken;

use crate::state::AppState;

/// `GET /optimizers` -> `{"optimizers": [identifier, ...]}`.
pub async fn list_optimizers(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut ids: Vec<&str> = state.registry.list();
    ids.sort();
    Json(serde_json::json!({ "optimizers": ids }))
}

/// `POST /optimize/{optimizer_type}`.
pub async fn optimize(
    State(state): State<AppState>,
    Path(optimizer_type): Path<String>,
    Json(body): Json<ProductionRequestInput>,
) -> Response {
    dispatch(state, optimizer_type, body).await
}

/// `POST /basic-optimization` -- legacy alias for the `basic` optimizer.
pub async fn basic_optimization(State(state): State<AppState>, Json(body): Json<ProductionRequestInput>) -> Response {
    dispatch(state, "basic".to_string(), body).await
}

/// `POST /demand-constrained` -- legacy alias for the `demand-constrained` optimizer.
pub async fn demand_constrained(State(state): State<AppState>, Json(body): Json<ProductionRequestInput>) -> Response {
    dispatch(state, "demand-constrained".to_string(), body).await
}

async fn dispatch(state: AppState, optimizer_id: String, body: ProductionRequestInput) -> Response {
    let registry = state.registry.clone();
    let timeout = state.config.solve_timeout;

    let outcome = tokio::task::spawn_blocking(move || {
        let cancel = CancellationToken::with_timeout(timeout);
        gat_prodmix::run(&registry, &optimizer_id, &body, &cancel)
    })
    .await;

    match outcome {
        Ok(Ok(result)) => envelope_response(result),
        Ok(Err(ProdMixError::UnknownOptimizer(id))) => {
            let body = serde_json::json!({
                "status": "validation_error",
                "solver_message": format!("unknown optimizer type: {id}"),
                "validation_errors": [format!("unknown optimizer type: {id}")],
            });
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        Ok(Err(other)) => {
            tracing::error!(error = %other, "optimizer dispatch failed");
            engine_error_response(other.to_string())
        }
        Err(join_err) => {
            tracing::error!(error = %join_err, "solve task panicked or was cancelled");
            engine_error_response(join_err.to_string())
        }
    }
}

fn engine_error_response(message: String) -> Response {
    let body = ProductionResult::engine_error(message);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Maps an internal status (§4.8 table) to the HTTP status code the
/// envelope travels with.
pub fn http_status_for(status: ProductionStatus) -> StatusCode {
    match status {
        ProductionStatus::Optimal
        | ProductionStatus::SolutionWarning
        | ProductionStatus::Infeasible
        | ProductionStatus::Unbounded => StatusCode::OK,
        ProductionStatus::ValidationError => StatusCode::BAD_REQUEST,
        ProductionStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn envelope_response(result: ProductionResult) -> Response {
    let status = http_status_for(result.status);
    (status, Json(result)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_table_matches_design() {
        assert_eq!(http_status_for(ProductionStatus::Optimal), StatusCode::OK);
        assert_eq!(http_status_for(ProductionStatus::SolutionWarning), StatusCode::OK);
        assert_eq!(http_status_for(ProductionStatus::Infeasible), StatusCode::OK);
        assert_eq!(http_status_for(ProductionStatus::Unbounded), StatusCode::OK);
        assert_eq!(http_status_for(ProductionStatus::ValidationError), StatusCode::BAD_REQUEST);
        assert_eq!(http_status_for(ProductionStatus::Error), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
