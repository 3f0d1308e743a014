//! Integration tests for registration and login.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::json;

use helpers::{TEST_SECRET, TestApp};
use inkpost_auth::jwt::JwtDecoder;
use inkpost_core::config::AuthConfig;
use inkpost_entity::user::UserRole;

#[tokio::test]
async fn test_register_created() {
    let app = TestApp::new();
    let resp = app
        .request(
            "POST",
            "/register",
            Some(json!({ "username": "alice", "password": "pw123", "role": "admin" })),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body["success"], true);
    assert_eq!(resp.body["message"], "User registered successfully");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new();
    app.register("alice", "pw123", Some("admin")).await;

    let resp = app
        .request(
            "POST",
            "/register",
            Some(json!({ "username": "alice", "password": "other" })),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["success"], false);
    assert_eq!(resp.body["error"], "Username already exists");

    // The first record is untouched.
    let token = app.login("alice", "pw123").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new();

    let resp = app
        .request("POST", "/register", Some(json!({ "username": "alice" })), None)
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "Username and password required");

    let resp = app
        .request(
            "POST",
            "/register",
            Some(json!({ "username": "   ", "password": "pw" })),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::new();
    let req = Request::builder()
        .method("POST")
        .uri("/register")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.send(req).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["success"], false);
}

#[tokio::test]
async fn test_register_unknown_role() {
    let app = TestApp::new();
    let resp = app
        .request(
            "POST",
            "/register",
            Some(json!({ "username": "eve", "password": "pw", "role": "superuser" })),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_returns_token_and_role() {
    let app = TestApp::new();
    app.register("alice", "pw123", Some("admin")).await;

    let resp = app
        .request(
            "POST",
            "/login",
            Some(json!({ "username": "alice", "password": "pw123" })),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["success"], true);
    assert_eq!(resp.body["role"], "admin");
    assert_eq!(resp.body["username"], "alice");

    let token = resp.body["token"].as_str().unwrap();
    let decoder = JwtDecoder::new(&AuthConfig {
        jwt_secret: TEST_SECRET.to_string(),
    });
    let claims = decoder.verify(token).unwrap();
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.role, UserRole::Admin);
}

#[tokio::test]
async fn test_login_failures_look_identical() {
    let app = TestApp::new();
    app.register("alice", "pw123", None).await;

    let wrong_password = app
        .request(
            "POST",
            "/login",
            Some(json!({ "username": "alice", "password": "wrong" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/login",
            Some(json!({ "username": "nobody", "password": "pw123" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new();
    let resp = app
        .request("POST", "/login", Some(json!({ "password": "pw" })), None)
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_whitespace_password_is_bad_request_on_both_routes() {
    let app = TestApp::new();
    app.register("alice", "pw123", None).await;
    let body = |user: &str| Some(json!({ "username": user, "password": "   " }));

    let register = app.request("POST", "/register", body("carol"), None).await;
    let login = app.request("POST", "/login", body("alice"), None).await;

    assert_eq!(register.status, StatusCode::BAD_REQUEST);
    assert_eq!(login.status, StatusCode::BAD_REQUEST);
    assert_eq!(register.body, login.body);
}

#[tokio::test]
async fn test_concurrent_registration_single_winner() {
    let app = TestApp::new();
    let body = || Some(json!({ "username": "racer", "password": "pw" }));

    let (a, b) = tokio::join!(
        app.request("POST", "/register", body(), None),
        app.request("POST", "/register", body(), None),
    );

    let mut statuses = [a.status.as_u16(), b.status.as_u16()];
    statuses.sort_unstable();
    assert_eq!(statuses, [201, 400]);
}
