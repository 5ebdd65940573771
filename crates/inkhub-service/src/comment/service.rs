//! Comment creation, listing, and deletion with ownership enforcement.

use std::sync::Arc;

use tracing::info;

use inkhub_auth::authz::ensure_owner;
use inkhub_core::error::AppError;
use inkhub_database::repositories::comment::CommentRepository;
use inkhub_entity::comment::{Comment, CreateComment};
use inkhub_entity::user::User;

/// Manages comment operations.
#[derive(Debug, Clone)]
pub struct CommentService {
    /// Comment repository.
    comment_repo: Arc<CommentRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(comment_repo: Arc<CommentRepository>) -> Self {
        Self { comment_repo }
    }

    /// Creates a comment on a post, owned by the principal. A dangling
    /// post id is rejected as a not-found.
    pub async fn create(
        &self,
        principal: &User,
        post_id: i64,
        content: &str,
    ) -> Result<Comment, AppError> {
        let comment = self
            .comment_repo
            .create(&CreateComment {
                content: content.to_string(),
                post_id,
                user_id: principal.id,
            })
            .await?;

        info!(
            user_id = principal.id,
            comment_id = comment.id,
            post_id,
            "Comment created"
        );
        Ok(comment)
    }

    /// Lists the principal's own comments, newest first.
    pub async fn list_own(&self, principal: &User) -> Result<Vec<Comment>, AppError> {
        self.comment_repo.find_by_owner(principal.id).await
    }

    /// Deletes a comment. Only the owner may remove it.
    pub async fn delete(&self, principal: &User, comment_id: i64) -> Result<(), AppError> {
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Cannot find Comment with id={comment_id}."))
            })?;

        ensure_owner(principal, &comment)?;

        self.comment_repo.delete(comment_id).await?;

        info!(user_id = principal.id, comment_id, "Comment deleted");
        Ok(())
    }
}
