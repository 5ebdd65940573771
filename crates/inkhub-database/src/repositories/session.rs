//! Session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use inkhub_core::error::{AppError, ErrorKind};
use inkhub_core::result::AppResult;
use inkhub_entity::session::Session;

/// Repository for server-side session rows.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new session row.
    pub async fn create(&self, session: &Session) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO sessions (token, user_id, created_at, expires_at, last_seen_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(session.token)
        .bind(session.user_id)
        .bind(session.created_at)
        .bind(session.expires_at)
        .bind(session.last_seen_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))?;
        Ok(())
    }

    /// Find a session by its opaque token.
    pub async fn find_by_token(&self, token: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Update a session's last-seen timestamp.
    pub async fn touch(&self, token: Uuid, seen_at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET last_seen_at = $2 WHERE token = $1")
            .bind(token)
            .bind(seen_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to touch session", e))?;
        Ok(())
    }

    /// Remove every session past its expiry. Returns the number of rows
    /// removed. Called opportunistically at startup.
    pub async fn delete_expired(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete expired sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
