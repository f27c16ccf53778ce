//! Shared harness for jot-web integration tests.
//!
//! Each test spawns the full router on an ephemeral port with the
//! in-memory backend, so the suite runs without a database and without
//! cross-test state.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::TimeDelta;
use jot_auth::password::CredentialHasher;
use jot_auth::session::SessionCodec;
use jot_models::memory::MemoryStore;
use jot_web::routes::router;
use jot_web::state::AppState;
use reqwest::header;

/// Signing secret shared by every spawned test service.
pub const TEST_SECRET: &str = "integration-test-secret";

/// A running service instance backed by an in-memory store.
pub struct TestApp {
    pub addr: String,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// Spawns the router on an ephemeral port and returns its address.
    pub async fn spawn() -> Self {
        let store = Arc::new(MemoryStore::new());
        let sessions = SessionCodec::new(TEST_SECRET, TimeDelta::hours(1));
        // Cheap hashing parameters keep the suite fast.
        let hasher = CredentialHasher::with_cost(8, 1, 1).expect("test hasher");
        let state = AppState::new(store.clone(), store.clone(), hasher, sessions);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = format!("http://{}", listener.local_addr().expect("listener address"));
        let app = router(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server stopped");
        });

        Self { addr, store }
    }

    fn path(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.addr)
    }

    /// Full URL for an endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        self.path(endpoint)
    }

    /// Issues a POST with a JSON body.
    pub async fn post(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        body: String,
    ) -> reqwest::Response {
        client
            .post(self.path(endpoint))
            .body(body)
            .send()
            .await
            .expect("Failed to send http request")
    }

    /// Issues a POST carrying an explicit session cookie.
    pub async fn post_with_cookie(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        body: String,
        token: &str,
    ) -> reqwest::Response {
        client
            .post(self.path(endpoint))
            .header(header::COOKIE, format!("session-token={token}"))
            .body(body)
            .send()
            .await
            .expect("Failed to send http request")
    }
}

/// Builds a client that keeps cookies, mirroring a browser session.
pub fn client() -> reqwest::Client {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        "content-type",
        header::HeaderValue::from_static("application/json"),
    );
    reqwest::ClientBuilder::new()
        .default_headers(headers)
        .cookie_store(true)
        .build()
        .expect("Failed to build reqwest Client")
}
