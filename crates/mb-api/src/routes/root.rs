//! Greeting endpoint.

use axum::extract::State;

use crate::state::AppState;

/// GET / — plain-text greeting.
pub async fn greeting(State(state): State<AppState>) -> &'static str {
    state.service.greeting()
}
