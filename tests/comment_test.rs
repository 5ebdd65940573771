//! Integration tests for comment routes: session gating.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_create_comment_requires_session() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/comments",
            Some(serde_json::json!({"content": "Nice post!", "postId": 1})),
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
async fn test_list_my_comments_requires_session() {
    let app = common::TestApp::new();

    let response = app
        .request("GET", "/api/comments/my-comments", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_comment_requires_session() {
    let app = common::TestApp::new();

    let response = app.request("DELETE", "/api/comments/7", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_comment_with_garbage_token_is_rejected() {
    let app = common::TestApp::new();

    let response = app
        .request("DELETE", "/api/comments/7", None, Some("nope"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
