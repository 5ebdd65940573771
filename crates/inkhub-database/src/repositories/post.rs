//! Post repository implementation.

use sqlx::PgPool;

use inkhub_core::error::{AppError, ErrorKind};
use inkhub_core::result::AppResult;
use inkhub_entity::post::{CreatePost, Post, UpdatePost};

/// Repository for post CRUD operations.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post by id", e))
    }

    /// List all posts owned by the given account, newest first.
    pub async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>(
            "SELECT * FROM posts WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// Create a new post. `published` starts false.
    pub async fn create(&self, data: &CreatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, content, user_id) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// Update a post's fields. `None` fields keep their current value.
    /// Returns `None` when the row no longer exists (e.g. a concurrent
    /// delete won the race).
    pub async fn update(&self, id: i64, data: &UpdatePost) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET title = COALESCE($2, title), \
                              content = COALESCE($3, content), \
                              published = COALESCE($4, published), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.published)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update post", e))
    }

    /// Delete a post by id. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;

        Ok(result.rows_affected() > 0)
    }
}
