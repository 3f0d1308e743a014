//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use inkpost_api::{AppState, build_app};
use inkpost_core::config::{AppConfig, AuthConfig, DatabaseConfig};
use inkpost_database::StoreManager;

/// Secret the test app signs tokens with.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

/// Parsed response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when the body is not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
    /// Content-Type header, if any
    pub content_type: Option<String>,
}

impl TestApp {
    /// Create a new test application backed by empty in-memory stores
    pub fn new() -> Self {
        let config = AppConfig {
            auth: AuthConfig {
                jwt_secret: TEST_SECRET.to_string(),
            },
            database: DatabaseConfig::memory(),
            ..AppConfig::default()
        };
        config.validate().expect("test config must be valid");

        let state = AppState::new(config.clone(), StoreManager::memory());
        let router = build_app(state);

        Self { router, config }
    }

    /// Send a request with an optional JSON body and bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let auth = token.map(|t| format!("Bearer {t}"));
        self.request_with_auth(method, path, body, auth.as_deref())
            .await
    }

    /// Send a request with a raw `Authorization` header value
    pub async fn request_with_auth(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prebuilt request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            text,
            content_type,
        }
    }

    /// Register an account and assert success
    pub async fn register(&self, username: &str, password: &str, role: Option<&str>) {
        let mut body = json!({ "username": username, "password": password });
        if let Some(role) = role {
            body["role"] = json!(role);
        }
        let resp = self.request("POST", "/register", Some(body), None).await;
        assert_eq!(resp.status, StatusCode::CREATED, "register failed: {}", resp.text);
    }

    /// Log in and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let resp = self
            .request(
                "POST",
                "/login",
                Some(json!({ "username": username, "password": password })),
                None,
            )
            .await;
        assert_eq!(resp.status, StatusCode::OK, "login failed: {}", resp.text);
        resp.body["token"]
            .as_str()
            .expect("login response has a token")
            .to_string()
    }

    /// Register an admin and return its token
    pub async fn admin_token(&self) -> String {
        self.register("alice", "pw123", Some("admin")).await;
        self.login("alice", "pw123").await
    }

    /// Register a regular user and return its token
    pub async fn user_token(&self) -> String {
        self.register("bob", "hunter2", None).await;
        self.login("bob", "hunter2").await
    }

    /// Create a post as `token` and return its id
    pub async fn create_post(&self, token: &str, title: &str, content: &str) -> String {
        let resp = self
            .request(
                "POST",
                "/posts",
                Some(json!({ "title": title, "content": content })),
                Some(token),
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED, "create failed: {}", resp.text);
        resp.body["_id"]
            .as_str()
            .expect("post has an id")
            .to_string()
    }
}
