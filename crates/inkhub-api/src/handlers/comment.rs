//! Comment handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::{CreateCommentRequest, validate_request};
use crate::dto::response::{CommentResponse, CommentWithAuthorResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/comments
pub async fn create_comment(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    validate_request(&req)?;

    let comment = state
        .comment_service
        .create(&current_user, req.post_id, &req.content)
        .await?;

    Ok(Json(CommentResponse::from(&comment)))
}

/// GET /api/comments/my-comments
pub async fn list_my_comments(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<Vec<CommentWithAuthorResponse>>, ApiError> {
    let comments = state.comment_service.list_own(&current_user).await?;

    Ok(Json(
        comments
            .iter()
            .map(|comment| CommentWithAuthorResponse::new(comment, &current_user))
            .collect(),
    ))
}

/// DELETE /api/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.comment_service.delete(&current_user, id).await?;

    Ok(Json(MessageResponse::new(
        "Comment was deleted successfully.",
    )))
}
