//! Integration tests for post routes: session gating and input handling.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_create_post_requires_session() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({"title": "Hello", "content": "World"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "User is not authenticated. Access denied."
    );
}

#[tokio::test]
async fn test_update_post_requires_session() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/posts/1",
            Some(serde_json::json!({"title": "Edited"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_post_requires_session() {
    let app = common::TestApp::new();

    let response = app.request("DELETE", "/api/posts/1", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mutations_with_garbage_token_are_rejected() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({"title": "Hello", "content": "World"})),
            Some("not-a-token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "User is not authenticated. Access denied."
    );
}
