//! Post handlers.

use axum::Json;
use axum::extract::{Path, State};

use inkhub_service::post::service::UpdatePostData;

use crate::dto::request::{CreatePostRequest, UpdatePostRequest, validate_request};
use crate::dto::response::{MessageResponse, PostResponse, PostWithAuthorResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    validate_request(&req)?;

    let post = state
        .post_service
        .create(&current_user, &req.title, &req.content)
        .await?;

    Ok(Json(PostResponse::from(&post)))
}

/// GET /api/posts/by-email/{email}
pub async fn list_posts_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<PostWithAuthorResponse>>, ApiError> {
    let (author, posts) = state.post_service.find_by_author_email(&email).await?;

    Ok(Json(
        posts
            .iter()
            .map(|post| PostWithAuthorResponse::new(post, &author))
            .collect(),
    ))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .post_service
        .update(
            &current_user,
            id,
            UpdatePostData {
                title: req.title,
                content: req.content,
                published: req.published,
            },
        )
        .await?;

    Ok(Json(MessageResponse::new("Post was updated successfully.")))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.post_service.delete(&current_user, id).await?;

    Ok(Json(MessageResponse::new("Post was deleted successfully.")))
}
