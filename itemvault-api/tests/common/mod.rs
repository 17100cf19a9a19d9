//! Common test utilities for integration tests
//!
//! Builds the full router over a `MemoryStore` so every request goes through
//! the same middleware, extractors, and error mapping as production.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use itemvault_api::app::{build_router, AppState};
use itemvault_api::config::Config;
use itemvault_shared::auth::service::AuthService;
use itemvault_shared::models::memory::MemoryStore;
use itemvault_shared::models::{CreateUser, UserStore};
use serde_json::Value;
use std::sync::Arc;
use tower::Service as _;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// Test context containing the app and its backing store
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub app: axum::Router,
    pub auth: AuthService,
}

impl TestContext {
    pub fn new() -> Self {
        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://unused/itemvault".to_string()),
            "JWT_SECRET" => Some(TEST_SECRET.to_string()),
            _ => None,
        })
        .expect("test config should load");

        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store.clone(), config);
        let auth = state.auth.clone();
        let app = build_router(state);

        Self { store, app, auth }
    }

    /// Inserts a user directly and returns a token for it
    ///
    /// Skips password hashing, so item tests stay fast.
    pub async fn token_for(&self, username: &str) -> String {
        let user = self
            .store
            .create_user(CreateUser {
                username: username.to_string(),
                email: Some(format!("{}@example.com", username)),
                password_hash: "unused".to_string(),
            })
            .await
            .expect("user should be created");

        self.auth.issue_token(&user).expect("token should be issued")
    }

    /// Sends a request and returns the status and parsed JSON body
    ///
    /// An empty body is returned as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send_raw(request).await
    }

    /// Sends a prebuilt request
    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                panic!("non-JSON body ({}): {}", status, String::from_utf8_lossy(&bytes))
            })
        };

        (status, body)
    }
}
