use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config from `config.toml` (or `CONFIG_PATH`), falling back to env vars
/// when the file is missing or invalid. Env values go through the same
/// normalization, so a zero port is still an error.
pub fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unavailable; using environment");
            AppConfig::from_env()
        }
    }
}

/// Build the application with a fresh, empty store.
pub fn build_app() -> Router {
    routes::build_router(AppState::new(), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: bind the configured address and serve until Ctrl+C.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let app = build_app();

    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "phones api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
