//! Shared application state (§5). The registry is built once at startup and
//! handed to every handler via [`axum::extract::State`] -- it is read-only
//! from then on, so no lock guards it (§9 design note).

use std::sync::Arc;

use gat_prodmix::OptimizerRegistry;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<OptimizerRegistry>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(registry: OptimizerRegistry, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }

    /// State pre-populated with the two built-in optimizer variants and
    /// default configuration -- the common case for tests and `main`.
    pub fn with_builtins() -> Self {
        Self::new(OptimizerRegistry::with_builtins(), ServerConfig::default())
    }
}
