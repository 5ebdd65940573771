//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A blog post. The owner reference is set at creation and never
/// reassigned; every mutation goes through the ownership check first.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Main body of the post.
    pub content: String,
    /// Publication status. New posts start unpublished.
    pub published: bool,
    /// Owning account's identifier.
    pub user_id: i64,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// The creating account; becomes the immutable owner.
    pub user_id: i64,
}

/// Data for updating an existing post. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New publication status.
    pub published: Option<bool>,
}
