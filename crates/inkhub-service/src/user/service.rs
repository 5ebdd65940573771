//! Account lifecycle: registration, lookup, profile updates, deletion.

use std::sync::Arc;

use tracing::info;

use inkhub_auth::password::PasswordHasher;
use inkhub_core::config::AuthConfig;
use inkhub_core::error::AppError;
use inkhub_database::repositories::user::UserRepository;
use inkhub_entity::user::{CreateUser, UpdateUser, User};

/// Manages account registration and profile operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Account repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

/// Profile fields to change. `None` fields keep their current value.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateProfileData {
    /// New display name.
    pub username: Option<String>,
    /// New login email.
    pub email: Option<String>,
    /// New plaintext password, hashed before storage.
    pub password: Option<String>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            password_min_length: config.password_min_length,
        }
    }

    /// Registers a new account. The plaintext password is hashed before
    /// it reaches the store; a duplicate email surfaces as a conflict.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        self.check_password_length(password)?;
        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = user.id, "Account registered");
        Ok(user)
    }

    /// Lists all registered accounts.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.find_all().await
    }

    /// Looks up an account by its display name.
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Cannot find User with username={username}."))
            })
    }

    /// Updates the principal's own profile. A new password, when present,
    /// is hashed here so the repository only ever sees digests.
    pub async fn update_profile(
        &self,
        principal: &User,
        data: UpdateProfileData,
    ) -> Result<User, AppError> {
        let password_hash = match data.password {
            Some(ref password) => {
                self.check_password_length(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            None => None,
        };

        let user = self
            .user_repo
            .update(
                principal.id,
                &UpdateUser {
                    username: data.username,
                    email: data.email,
                    password_hash,
                },
            )
            .await?;

        info!(user_id = user.id, "Profile updated");
        Ok(user)
    }

    /// Deletes the principal's own account. Posts, comments, and sessions
    /// cascade away with it.
    pub async fn delete_profile(&self, principal: &User) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(principal.id).await?;
        if !deleted {
            return Err(AppError::not_found(format!(
                "Cannot find User with id={}.",
                principal.id
            )));
        }

        info!(user_id = principal.id, "Account deleted");
        Ok(())
    }

    /// Backstop for the DTO-level length check; the configured minimum
    /// wins if the two ever disagree.
    fn check_password_length(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.password_min_length
            )));
        }
        Ok(())
    }
}
