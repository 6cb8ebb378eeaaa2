//! Shared test harness for E2E integration tests.
//!
//! Drives the real router in-process via `tower::oneshot`, or serves it on
//! an ephemeral TCP port for socket-level tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

use mb_api::env::SystemEnvironment;
use mb_api::mock::FixedEnvironment;
use mb_api::routes::{build_router, build_router_with_cors, cors_layer};
use mb_api::state::AppState;

/// A raw HTTP exchange: status, headers and body bytes.
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// End-to-end test harness over a pinned environment.
pub struct TestHarness {
    /// Environment the service reads; advance it between requests.
    pub env: Arc<FixedEnvironment>,
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
}

impl TestHarness {
    /// Harness with default pinned values and no environment variables.
    pub fn new() -> Self {
        Self::with_environment(FixedEnvironment::new())
    }

    pub fn with_environment(env: FixedEnvironment) -> Self {
        let env = Arc::new(env);
        let router = build_router(AppState::with_environment(env.clone()));
        Self { env, router }
    }

    /// Harness whose CORS policy only admits `origins`.
    pub fn with_allowed_origins(origins: &[&str]) -> Self {
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        let env = Arc::new(FixedEnvironment::new());
        let router = build_router_with_cors(
            AppState::with_environment(env.clone()),
            cors_layer(&origins).unwrap(),
        );
        Self { env, router }
    }

    /// GET `path` carrying an `Origin` header.
    pub async fn get_from_origin(&self, path: &str, origin: &str) -> Reply {
        self.send(
            Request::get(path)
                .header(axum::http::header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Send an arbitrary request through the router.
    pub async fn send(&self, request: Request<Body>) -> Reply {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();
        Reply {
            status,
            headers,
            body,
        }
    }

    /// GET `path` with an empty body.
    pub async fn get(&self, path: &str) -> Reply {
        self.send(Request::get(path).body(Body::empty()).unwrap())
            .await
    }
}

/// Serve the router over the real process environment on 127.0.0.1:0.
/// Returns the bound address; the server runs until the test runtime ends.
pub async fn spawn_server() -> SocketAddr {
    let state = AppState::with_environment(Arc::new(SystemEnvironment::new()));
    let app = build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
