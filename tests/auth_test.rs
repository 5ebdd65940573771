//! Integration tests for registration validation and session gating.
//!
//! These paths are rejected before the store is ever touched, so they
//! run against the real router without a database.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_welcome_route() {
    let app = common::TestApp::new();

    let response = app.request("GET", "/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Welcome to our blogging app!");
}

#[tokio::test]
async fn test_health_route() {
    let app = common::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_register_reports_every_violation() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "",
                "email": "not-an-email",
                "password": "short",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Validation failed.");

    let errors = response.body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0]["field"], "email");
    assert_eq!(errors[0]["message"], "Must be a valid email address");
    assert_eq!(errors[1]["field"], "password");
    assert_eq!(
        errors[1]["message"],
        "Password must be at least 6 characters long"
    );
    assert_eq!(errors[2]["field"], "username");
    assert_eq!(errors[2]["message"], "Username is required");
}

#[tokio::test]
async fn test_register_rejects_single_bad_field() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "12345",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "password");
}

#[tokio::test]
async fn test_login_rejects_empty_credentials() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users/login",
            Some(serde_json::json!({"email": "", "password": ""})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_profile_routes_require_session() {
    let app = common::TestApp::new();

    let update = app
        .request(
            "PUT",
            "/api/users/profile",
            Some(serde_json::json!({"username": "other"})),
            None,
        )
        .await;
    assert_eq!(update.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        update.body["message"],
        "User is not authenticated. Access denied."
    );

    let delete = app.request("DELETE", "/api/users/profile", None, None).await;
    assert_eq!(delete.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        delete.body["message"],
        "User is not authenticated. Access denied."
    );
}

#[tokio::test]
async fn test_garbage_session_token_is_rejected() {
    // A cookie value that is not even a token shape never reaches the
    // session store; it is rejected during resolution.
    let app = common::TestApp::new();

    let response = app
        .request(
            "DELETE",
            "/api/users/profile",
            None,
            Some("definitely-not-a-session-token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "User is not authenticated. Access denied."
    );
}
