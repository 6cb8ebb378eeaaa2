//! Ambient process state behind a read-only provider.
//!
//! The service never touches the clock or `std::env` directly; it asks an
//! [`Environment`] so tests can pin every value (see [`crate::mock`]).

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

/// Variable read for the health `environment` field.
pub const NODE_ENV_VAR: &str = "NODE_ENV";

/// Version of the toolchain that compiled this binary, e.g. "v1.85.0".
pub const RUNTIME_VERSION: &str = env!("MB_RUSTC_VERSION");

/// Read-only view of the process environment.
pub trait Environment: Send + Sync {
    /// Current wall-clock instant.
    fn now(&self) -> DateTime<Utc>;

    /// Monotonic time elapsed since the process started.
    fn uptime(&self) -> Duration;

    /// Look up an environment variable. Unset and non-UTF-8 values are `None`.
    fn var(&self, name: &str) -> Option<String>;

    /// Identifier of the host runtime.
    fn runtime_version(&self) -> String;
}

/// The real environment: system clock, `std::env`, build-time runtime version.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    started_at: Instant,
}

impl SystemEnvironment {
    /// Capture "process start" as now. Construct this once, early in `main`.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for SystemEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SystemEnvironment {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn runtime_version(&self) -> String {
        RUNTIME_VERSION.to_string()
    }
}
