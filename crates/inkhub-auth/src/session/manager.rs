//! Session lifecycle manager — login and per-request resolution.
//!
//! Replaces callback-style session hooks with two plain async calls:
//! `create_session(account) -> token` and `resolve(token) -> Option<Account>`.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use inkhub_core::config::SessionConfig;
use inkhub_core::error::AppError;
use inkhub_database::repositories::session::SessionRepository;
use inkhub_database::repositories::user::UserRepository;
use inkhub_entity::session::Session;
use inkhub_entity::user::User;

use crate::password::PasswordHasher;

/// The single message returned for every login rejection. Unknown email
/// and wrong password are indistinguishable on the wire so the endpoint
/// cannot be used to enumerate registered handles.
pub const LOGIN_REJECTION: &str = "Invalid email or password.";

/// Manages the session lifecycle: credential verification on login and
/// token-to-principal resolution on every authenticated request.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Account persistence.
    user_repo: Arc<UserRepository>,
    /// Session persistence.
    session_repo: Arc<SessionRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Session configuration.
    config: SessionConfig,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        user_repo: Arc<UserRepository>,
        session_repo: Arc<SessionRepository>,
        hasher: Arc<PasswordHasher>,
        config: SessionConfig,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            hasher,
            config,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Look up the account by its login handle
    /// 2. Verify the supplied password against the stored digest
    /// 3. Establish a session bound to the account identifier
    ///
    /// Steps 1 and 2 fail with the same rejection; only store or hasher
    /// faults surface as internal errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, Session), AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::invalid_credentials(LOGIN_REJECTION))?;

        let password_valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !password_valid {
            return Err(AppError::invalid_credentials(LOGIN_REJECTION));
        }

        let session = self.create_session(&user).await?;

        info!(user_id = user.id, "Login successful");
        Ok((user, session))
    }

    /// Establishes a new session for an already-authenticated account.
    /// Also used by registration, which logs the new account in directly.
    pub async fn create_session(&self, user: &User) -> Result<Session, AppError> {
        let now = Utc::now();
        let session = Session {
            token: Uuid::new_v4(),
            user_id: user.id,
            created_at: now,
            expires_at: expiry_for(now, self.config.ttl_hours)?,
            last_seen_at: now,
        };

        self.session_repo.create(&session).await?;
        Ok(session)
    }

    /// Resolves a raw cookie value back to the authenticated principal.
    ///
    /// Every miss — unparseable token, unknown or expired session, an
    /// account that no longer exists — yields `Ok(None)`: the request
    /// simply proceeds without a principal. Only store faults are errors.
    pub async fn resolve(&self, token: &str) -> Result<Option<User>, AppError> {
        let token = match token.parse::<Uuid>() {
            Ok(token) => token,
            Err(_) => return Ok(None),
        };

        let session = match self.session_repo.find_by_token(token).await? {
            Some(session) => session,
            None => return Ok(None),
        };

        if session.is_expired() {
            return Ok(None);
        }

        // Fail closed: a session must never resolve to a destroyed account.
        let user = match self.user_repo.find_by_id(session.user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if let Err(e) = self.session_repo.touch(token, Utc::now()).await {
            warn!(error = %e, "Failed to update session activity");
        }

        Ok(Some(user))
    }

    /// The cookie name sessions travel under.
    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }
}

/// Absolute expiry instant for a session created at `now`. A TTL too large
/// to represent is reported as a configuration error instead of panicking
/// inside duration arithmetic.
fn expiry_for(now: DateTime<Utc>, ttl_hours: u64) -> Result<DateTime<Utc>, AppError> {
    i64::try_from(ttl_hours)
        .ok()
        .and_then(Duration::try_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| {
            AppError::configuration(format!("Session TTL of {ttl_hours} hours is out of range"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkhub_core::error::ErrorKind;

    #[test]
    fn test_expiry_honors_configured_ttl() {
        let now = Utc::now();
        let expires_at = expiry_for(now, 24).unwrap();
        assert_eq!(expires_at - now, Duration::hours(24));
    }

    #[test]
    fn test_oversized_ttl_is_a_configuration_error() {
        let err = expiry_for(Utc::now(), u64::MAX).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);

        let err = expiry_for(Utc::now(), i64::MAX as u64).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
