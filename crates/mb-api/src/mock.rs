//! Mock environment for testing — serves pinned clock, uptime and variables.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use crate::env::Environment;

/// An environment whose every reading is set by the test.
///
/// Clock and uptime can be advanced between requests to exercise
/// monotonicity across calls.
pub struct FixedEnvironment {
    now: RwLock<DateTime<Utc>>,
    uptime: RwLock<Duration>,
    vars: HashMap<String, String>,
    runtime_version: String,
}

impl FixedEnvironment {
    /// 2024-01-15T12:00:00Z, 42.5s uptime, no variables, runtime "v0.0.0-test".
    pub fn new() -> Self {
        Self {
            now: RwLock::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()),
            uptime: RwLock::new(Duration::from_millis(42_500)),
            vars: HashMap::new(),
            runtime_version: "v0.0.0-test".into(),
        }
    }

    pub fn with_now(self, now: DateTime<Utc>) -> Self {
        *self.now.write().unwrap() = now;
        self
    }

    pub fn with_uptime(self, uptime: Duration) -> Self {
        *self.uptime.write().unwrap() = uptime;
        self
    }

    /// Set an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn with_runtime_version(mut self, version: impl Into<String>) -> Self {
        self.runtime_version = version.into();
        self
    }

    /// Move both clocks forward by `by`.
    pub fn advance(&self, by: Duration) {
        let delta = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
        *self.now.write().unwrap() += delta;
        *self.uptime.write().unwrap() += by;
    }
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for FixedEnvironment {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }

    fn uptime(&self) -> Duration {
        *self.uptime.read().unwrap()
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn runtime_version(&self) -> String {
        self.runtime_version.clone()
    }
}
