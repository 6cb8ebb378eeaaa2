//! Payload computation for the three public endpoints.

use std::sync::Arc;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::env::{Environment, NODE_ENV_VAR};

/// Body of `GET /`.
pub const GREETING: &str = "Hello World! Minimal NestJS Backend is running.";

/// Service identifier reported by `GET /version`.
pub const SERVICE_NAME: &str = "minimal-nestjs-backend";

/// Service version reported by `GET /version`.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Reported when `NODE_ENV` is unset or empty.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Liveness report for `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always "ok".
    pub status: String,
    /// ISO-8601 UTC instant, millisecond precision ("2024-01-15T12:00:00.000Z").
    pub timestamp: String,
    /// Seconds since process start.
    pub uptime: f64,
    pub environment: String,
}

/// Build identity for `GET /version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
    /// Host runtime version. Serialized as `node` for clients of the
    /// original service.
    #[serde(rename = "node")]
    pub runtime: String,
}

/// Computes endpoint payloads from constants and the injected environment.
///
/// Built once at startup and shared by every request through [`crate::state::AppState`].
#[derive(Clone)]
pub struct AppService {
    env: Arc<dyn Environment>,
}

impl AppService {
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self { env }
    }

    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".into(),
            timestamp: self
                .env
                .now()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: self.env.uptime().as_secs_f64(),
            environment: self.environment_name(),
        }
    }

    pub fn version(&self) -> VersionInfo {
        VersionInfo {
            name: SERVICE_NAME.into(),
            version: SERVICE_VERSION.into(),
            runtime: self.env.runtime_version(),
        }
    }

    /// `NODE_ENV`, or the default when it is unset or empty.
    fn environment_name(&self) -> String {
        self.env
            .var(NODE_ENV_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
    }
}
