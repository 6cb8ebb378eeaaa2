//! Minimal backend API — greeting, health and version endpoints.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mb_api::config::ApiConfig;
use mb_api::env::SystemEnvironment;
use mb_api::routes;
use mb_api::shutdown;
use mb_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Uptime counts from here.
    let environment = SystemEnvironment::new();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mb-api starting");

    let config = ApiConfig::from_env()?;

    if config.cors_origins.is_empty() {
        tracing::warn!("CORS_ORIGINS not set — allowing requests from any origin");
    } else {
        tracing::info!(origins = ?config.cors_origins, "CORS restricted");
    }
    let cors = routes::cors_layer(&config.cors_origins)?;

    let state = AppState::with_environment(Arc::new(environment));
    let app = routes::build_router_with_cors(state, cors);

    let shutdown = shutdown::listen()?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
        })
        .await?;

    tracing::info!("mb-api stopped");
    Ok(())
}
