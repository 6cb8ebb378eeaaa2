//! Shared application state for the Axum server.

use std::sync::Arc;

use crate::env::Environment;
use crate::service::AppService;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// The single service instance, built at startup.
    pub service: Arc<AppService>,
}

impl AppState {
    /// State over an environment provider: `SystemEnvironment` in `main`,
    /// `FixedEnvironment` in tests.
    pub fn with_environment(env: Arc<dyn Environment>) -> Self {
        Self {
            service: Arc::new(AppService::new(env)),
        }
    }
}
