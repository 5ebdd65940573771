//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment on a post, owned by the account that wrote it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// Comment body.
    pub content: String,
    /// The post this comment belongs to.
    pub post_id: i64,
    /// Owning account's identifier.
    pub user_id: i64,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// Comment body.
    pub content: String,
    /// Target post.
    pub post_id: i64,
    /// The creating account; becomes the immutable owner.
    pub user_id: i64,
}
