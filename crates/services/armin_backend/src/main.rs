use armin_backend::{build_router, AppState};
use armin_common::{logging, ArminError, Context};
use armin_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ArminError> {
    let config = Arc::new(load_config()?);
    // Keeps the file writer flushing until shutdown
    let _log_guard = logging::init_with_config(&config.logging);

    let state = AppState::new(config.clone()).await;
    let app = build_router(&state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;
    Ok(())
}
