//! Comment repository implementation.

use sqlx::PgPool;

use inkhub_core::error::{AppError, ErrorKind};
use inkhub_core::result::AppResult;
use inkhub_entity::comment::{Comment, CreateComment};

/// Repository for comment CRUD operations.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a comment by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find comment by id", e)
            })
    }

    /// List all comments owned by the given account, newest first.
    pub async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// Create a new comment. A dangling `post_id` is rejected by the
    /// foreign key and surfaces as a not-found.
    pub async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (content, post_id, user_id) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.content)
        .bind(data.post_id)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("comments_post_id_fkey") =>
            {
                AppError::not_found(format!("Cannot find Post with id={}.", data.post_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create comment", e),
        })
    }

    /// Delete a comment by id. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete comment", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
