//! Minimal backend API — library crate for the greeting/health/version server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `mb-e2e-tests`) can access `AppState`, `build_router` and the
//! environment providers.

pub mod config;
pub mod env;
pub mod error;
pub mod mock;
pub mod routes;
pub mod service;
pub mod shutdown;
pub mod state;
