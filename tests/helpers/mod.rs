//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use chrono::{Duration, Utc};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use goodies_api::{AppState, build_app};
use goodies_core::config::AppConfig;
use goodies_core::types::Document;
use goodies_database::StoreManager;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context over a fresh in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for seeding and direct inspection
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.store.provider = "memory".to_string();
        config.auth.jwt_secret = TEST_SECRET.to_string();

        let store = StoreManager::connect(&config)
            .await
            .expect("Failed to init memory store");
        let state = AppState::new(config, store).expect("Failed to build state");

        Self {
            router: build_app(state.clone()),
            state,
        }
    }

    /// Store a user record, optionally with a role.
    pub async fn seed_user(&self, email: &str, role: Option<&str>) {
        let mut doc = Document::new();
        doc.insert("name".to_string(), json!(email.split('@').next()));
        if let Some(role) = role {
            doc.insert("role".to_string(), json!(role));
        }
        self.state
            .user_repo
            .upsert_by_email(email, doc)
            .await
            .expect("Failed to seed user");
    }

    /// Seed an admin user and return a live credential for them.
    pub async fn admin_token(&self, email: &str) -> String {
        self.seed_user(email, Some("admin")).await;
        self.token_for(email)
    }

    /// A live credential for `email`.
    pub fn token_for(&self, email: &str) -> String {
        self.state
            .jwt_encoder
            .issue(email)
            .expect("Failed to issue token")
    }

    /// A credential for `email` that expired an hour ago.
    pub fn expired_token_for(&self, email: &str) -> String {
        self.state
            .jwt_encoder
            .issue_at(email, Utc::now() - Duration::hours(11))
            .expect("Failed to issue token")
    }

    /// Send a request, attaching `Bearer <token>` when a token is given.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let header = token.map(|t| HeaderValue::from_str(&format!("Bearer {t}")).unwrap());
        self.request_with_header(method, path, body, header).await
    }

    /// Send a request with a raw `Authorization` header value.
    pub async fn request_with_header(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<HeaderValue>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json");

        if let Some(value) = authorization {
            req = req.header(AUTHORIZATION, value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a request with no body and no `Content-Type`.
    pub async fn request_without_body(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = req.body(Body::empty()).expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when the body is not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}
