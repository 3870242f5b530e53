//! Server configuration (§1.1 ambient stack). Loaded from environment
//! variables with documented defaults -- no config file format is invented
//! since the teacher workspace does not carry one either.

use std::time::Duration;

/// `GAT_HTTP_BIND` -- default `127.0.0.1:8080`.
const ENV_BIND: &str = "GAT_HTTP_BIND";
/// `GAT_HTTP_BASE_PATH` -- default `/production`.
const ENV_BASE_PATH: &str = "GAT_HTTP_BASE_PATH";
/// `GAT_HTTP_FEASIBILITY_TOL` -- overrides `gat_solver_lp::tolerances::FEASIBILITY_TOL`.
const ENV_FEASIBILITY_TOL: &str = "GAT_HTTP_FEASIBILITY_TOL";
/// `GAT_HTTP_NUMERIC_FOCUS` -- `"true"`/`"false"`, default `true`.
const ENV_NUMERIC_FOCUS: &str = "GAT_HTTP_NUMERIC_FOCUS";
/// `GAT_HTTP_SOLVE_TIMEOUT_SECS` -- default 60s, maps to the same cancellation path as explicit cancellation.
const ENV_SOLVE_TIMEOUT_SECS: &str = "GAT_HTTP_SOLVE_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub base_path: String,
    pub feasibility_tol: f64,
    pub numeric_focus: bool,
    pub solve_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            base_path: "/production".to_string(),
            feasibility_tol: gat_solver_lp::tolerances::FEASIBILITY_TOL,
            numeric_focus: true,
            solve_timeout: Duration::from_secs(60),
        }
    }
}

impl ServerConfig {
    /// Builds a config from environment variables, falling back to
    /// [`ServerConfig::default`] for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var(ENV_BIND).unwrap_or(defaults.bind_addr),
            base_path: std::env::var(ENV_BASE_PATH).unwrap_or(defaults.base_path),
            feasibility_tol: std::env::var(ENV_FEASIBILITY_TOL)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.feasibility_tol),
            numeric_focus: std::env::var(ENV_NUMERIC_FOCUS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.numeric_focus),
            solve_timeout: std::env::var(ENV_SOLVE_TIMEOUT_SECS)
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.solve_timeout),
        }
    }
}
