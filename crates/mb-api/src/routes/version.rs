//! Build/version info endpoint.

use axum::Json;
use axum::extract::State;

use crate::service::VersionInfo;
use crate::state::AppState;

/// GET /version — service name, version and runtime.
pub async fn version(State(state): State<AppState>) -> Json<VersionInfo> {
    Json(state.service.version())
}
