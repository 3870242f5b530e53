use gat_http::{AppState, ServerConfig};
use gat_prodmix::OptimizerRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let state = AppState::new(OptimizerRegistry::with_builtins(), ServerConfig::from_env());
    gat_http::serve(state).await?;
    Ok(())
}
