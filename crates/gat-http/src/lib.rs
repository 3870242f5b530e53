//! # gat-http: HTTP contract for the production-mix optimizer (C8)
//!
//! Translates between JSON payloads and [`gat_prodmix`]'s internal request
//! object, dispatches through the optimizer registry, and maps internal
//! solve statuses to HTTP codes per §4.8. The VRP core has no HTTP surface
//! (§6.5) and is not exposed here.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::ServerConfig;
pub use error::HttpError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the router under `state.config.base_path`, mounting `/optimizers`,
/// `/optimize/:optimizer_type`, and the two legacy aliases.
pub fn router(state: AppState) -> Router {
    let base = state.config.base_path.clone();
    let api = Router::new()
        .route("/optimizers", get(handlers::list_optimizers))
        .route("/optimize/:optimizer_type", post(handlers::optimize))
        .route("/basic-optimization", post(handlers::basic_optimization))
        .route("/demand-constrained", post(handlers::demand_constrained))
        .with_state(state);

    Router::new()
        .nest(&base, api)
        .layer(TraceLayer::new_for_http())
}

/// Binds and serves `router(state)` until the process receives a ctrl-c,
/// per the state machine of §4.8 ("received -> ... -> responded" per
/// request; the server itself runs until shut down externally).
pub async fn serve(state: AppState) -> Result<(), HttpError> {
    let bind_addr = state.config.bind_addr.clone();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| HttpError::Bind(bind_addr.clone(), e))?;
    tracing::info!(%bind_addr, "gat-http listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HttpError::Bind(bind_addr, std::io::Error::new(std::io::ErrorKind::Other, e)))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
