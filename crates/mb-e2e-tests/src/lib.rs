//! End-to-end tests for the minimal backend API.
//!
//! All tests live in `tests/`; this crate has no library code.
