//! Health check endpoint.

use axum::Json;
use axum::extract::State;

use crate::service::HealthStatus;
use crate::state::AppState;

/// GET /health — liveness, uptime and deployment environment.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let health = state.service.health();
    tracing::debug!(uptime = health.uptime, environment = %health.environment, "health check");
    Json(health)
}
