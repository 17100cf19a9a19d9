//! Registration and login over HTTP

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::TestContext;
use itemvault_shared::models::UserStore;
use serde_json::json;

#[tokio::test]
async fn test_register_returns_created_with_token() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .send(
            Method::POST,
            "/register",
            None,
            Some(json!({"username": "alice", "email": "alice@example.com", "password": "hunter2"})),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");

    let token = body["token"].as_str().expect("token should be a string");
    let claims = ctx.auth.verify_token(token).unwrap();
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
}

#[tokio::test]
async fn test_register_response_never_contains_password() {
    let ctx = TestContext::new();

    let (_, body) = ctx
        .send(
            Method::POST,
            "/register",
            None,
            Some(json!({"username": "alice", "email": "alice@example.com", "password": "plaintext-marker"})),
        )
        .await;

    assert!(!body.to_string().contains("plaintext-marker"));

    let stored = ctx.store.find_by_username("alice").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "plaintext-marker");
}

#[tokio::test]
async fn test_register_duplicate_username_or_email_conflicts() {
    let ctx = TestContext::new();
    let first = json!({"username": "alice", "email": "alice@example.com", "password": "pw"});
    let (status, _) = ctx.send(Method::POST, "/register", None, Some(first)).await;
    assert_eq!(status, StatusCode::CREATED);

    let same_username = json!({"username": "alice", "email": "other@example.com", "password": "pw"});
    let (status, body) = ctx.send(Method::POST, "/register", None, Some(same_username)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    let same_email = json!({"username": "bob", "email": "alice@example.com", "password": "pw"});
    let (status, _) = ctx.send(Method::POST, "/register", None, Some(same_email)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // No partial user left behind
    assert!(ctx.store.find_by_username("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_register_rejects_missing_and_empty_fields() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .send(Method::POST, "/register", None, Some(json!({"username": "alice", "password": "pw"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");

    let (status, body) = ctx
        .send(
            Method::POST,
            "/register",
            None,
            Some(json!({"username": "", "email": "alice@example.com", "password": "pw"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"][0]["field"], "username");
}

#[tokio::test]
async fn test_register_rejects_malformed_body() {
    let ctx = TestContext::new();

    let not_json = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = ctx.send_raw(not_json).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");

    let wrong_content_type = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"username":"a","email":"b","password":"c"}"#))
        .unwrap();
    let (status, _) = ctx.send_raw(wrong_content_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success_and_uniform_failure() {
    let ctx = TestContext::new();
    ctx.send(
        Method::POST,
        "/register",
        None,
        Some(json!({"username": "alice", "email": "alice@example.com", "password": "correct"})),
    )
    .await;

    let (status, body) = ctx
        .send(Method::POST, "/login", None, Some(json!({"username": "alice", "password": "correct"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();
    assert_eq!(ctx.auth.verify_token(token).unwrap().username, "alice");

    let (wrong_status, wrong_body) = ctx
        .send(Method::POST, "/login", None, Some(json!({"username": "alice", "password": "incorrect"})))
        .await;
    let (unknown_status, unknown_body) = ctx
        .send(Method::POST, "/login", None, Some(json!({"username": "nobody", "password": "correct"})))
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body["message"], "Invalid username or password");
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_login_store_failure_is_internal_error() {
    let ctx = TestContext::new();
    ctx.store.set_unavailable(true);

    let (status, body) = ctx
        .send(Method::POST, "/login", None, Some(json!({"username": "alice", "password": "pw"})))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "An internal error occurred");
}

#[tokio::test]
async fn test_health_reports_store_connectivity() {
    let ctx = TestContext::new();

    let (status, body) = ctx.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");

    ctx.store.set_unavailable(true);
    let (status, body) = ctx.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "disconnected");
}
