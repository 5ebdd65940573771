//! Post CRUD with ownership enforcement.
//!
//! Writes go through the same gate: load the post, check ownership,
//! then touch the store. A missing post is reported before ownership is
//! considered, so non-owners still learn whether an id exists — but
//! never anything about its content.

use std::sync::Arc;

use tracing::info;

use inkhub_auth::authz::ensure_owner;
use inkhub_core::error::AppError;
use inkhub_database::repositories::post::PostRepository;
use inkhub_database::repositories::user::UserRepository;
use inkhub_entity::post::{CreatePost, Post, UpdatePost};
use inkhub_entity::user::User;

/// Manages post CRUD operations.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post repository.
    post_repo: Arc<PostRepository>,
    /// Account repository, for author lookups.
    user_repo: Arc<UserRepository>,
}

/// Post fields to change. `None` fields keep their current value.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdatePostData {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New publication state.
    pub published: Option<bool>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(post_repo: Arc<PostRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            post_repo,
            user_repo,
        }
    }

    /// Creates a post owned by the principal. Posts start unpublished.
    pub async fn create(
        &self,
        principal: &User,
        title: &str,
        content: &str,
    ) -> Result<Post, AppError> {
        let post = self
            .post_repo
            .create(&CreatePost {
                title: title.to_string(),
                content: content.to_string(),
                user_id: principal.id,
            })
            .await?;

        info!(user_id = principal.id, post_id = post.id, "Post created");
        Ok(post)
    }

    /// Looks up an author by email and returns them with all their posts.
    pub async fn find_by_author_email(&self, email: &str) -> Result<(User, Vec<Post>), AppError> {
        let author = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found."))?;

        let posts = self.post_repo.find_by_owner(author.id).await?;
        Ok((author, posts))
    }

    /// Updates a post. Only the owner may change it; a missing post is a
    /// not-found regardless of who asks.
    pub async fn update(
        &self,
        principal: &User,
        post_id: i64,
        data: UpdatePostData,
    ) -> Result<Post, AppError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Cannot find Post with id={post_id}.")))?;

        ensure_owner(principal, &post)?;

        let updated = self
            .post_repo
            .update(
                post_id,
                &UpdatePost {
                    title: data.title,
                    content: data.content,
                    published: data.published,
                },
            )
            .await?
            // The row can vanish between the ownership check and the
            // write if a concurrent delete wins.
            .ok_or_else(|| AppError::not_found(format!("Cannot find Post with id={post_id}.")))?;

        info!(user_id = principal.id, post_id, "Post updated");
        Ok(updated)
    }

    /// Deletes a post. Only the owner may remove it; comments on the
    /// post cascade away with it.
    pub async fn delete(&self, principal: &User, post_id: i64) -> Result<(), AppError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Cannot find Post with id={post_id}.")))?;

        ensure_owner(principal, &post)?;

        self.post_repo.delete(post_id).await?;

        info!(user_id = principal.id, post_id, "Post deleted");
        Ok(())
    }
}
