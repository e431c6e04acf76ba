use tracing_subscriber::{EnvFilter, fmt};

use todos::shell::config::AppConfig;
use todos::shell::graphql::GRAPHQL_PATH;
use todos::shell::http::app;
use todos::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let addr = config.addr();

    // In-memory store for the lifetime of the process
    let state = AppState::in_memory();
    let app = app(state, config.cors_permissive);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("REST endpoint: http://{}/todos", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
