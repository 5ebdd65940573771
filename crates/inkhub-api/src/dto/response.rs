//! Response DTOs.
//!
//! Wire field names are camelCase (`userId`, `postId`, `createdAt`). The
//! password digest never appears in any projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use inkhub_entity::comment::Comment;
use inkhub_entity::post::Post;
use inkhub_entity::user::User;

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Builds a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public account projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Account identifier.
    pub id: i64,
    /// Display name.
    pub username: String,
    /// Login email.
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Login success response: message plus the account projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable message.
    pub message: String,
    /// The authenticated account.
    pub user: UserResponse,
}

/// Post projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    /// Post identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Publication state.
    pub published: bool,
    /// Owner account identifier.
    pub user_id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            published: post.published,
            user_id: post.user_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Post projection with its author attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithAuthorResponse {
    /// The post.
    #[serde(flatten)]
    pub post: PostResponse,
    /// The owning account.
    pub user: UserResponse,
}

impl PostWithAuthorResponse {
    /// Joins a post with its author.
    pub fn new(post: &Post, author: &User) -> Self {
        Self {
            post: PostResponse::from(post),
            user: UserResponse::from(author),
        }
    }
}

/// Comment projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    /// Comment identifier.
    pub id: i64,
    /// Body.
    pub content: String,
    /// The commented post.
    pub post_id: i64,
    /// Owner account identifier.
    pub user_id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content.clone(),
            post_id: comment.post_id,
            user_id: comment.user_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Comment projection with its author attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthorResponse {
    /// The comment.
    #[serde(flatten)]
    pub comment: CommentResponse,
    /// The owning account.
    pub user: UserResponse,
}

impl CommentWithAuthorResponse {
    /// Joins a comment with its author.
    pub fn new(comment: &Comment, author: &User) -> Self {
        Self {
            comment: CommentResponse::from(comment),
            user: UserResponse::from(author),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_post_response_is_camel_case() {
        let post = Post {
            id: 1,
            title: "T".to_string(),
            content: "C".to_string(),
            published: false,
            user_id: 9,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(PostResponse::from(&post)).unwrap();
        assert_eq!(json["userId"], 9);
        assert!(json.get("user_id").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_post_with_author_flattens_post_fields() {
        let post = Post {
            id: 1,
            title: "T".to_string(),
            content: "C".to_string(),
            published: true,
            user_id: 9,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let author = User {
            id: 9,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "digest".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(PostWithAuthorResponse::new(&post, &author)).unwrap();
        assert_eq!(json["title"], "T");
        assert_eq!(json["user"]["username"], "alice");
        assert!(json["user"].get("password_hash").is_none());
    }
}
