//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account on the blogging platform.
///
/// The email is the unique login handle; the numeric id is the canonical
/// identity used for ownership checks and session payloads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Surrogate identifier, assigned at creation, immutable.
    pub id: i64,
    /// Display name.
    pub username: String,
    /// Unique login handle.
    pub email: String,
    /// Argon2 password digest. Never leaves the server.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new account. The password is hashed before
/// this struct is constructed; plaintext never reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub username: String,
    /// Login handle.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Data for updating an existing account's profile. Each field is
/// independently optional; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub username: Option<String>,
    /// New login handle.
    pub email: Option<String>,
    /// New pre-hashed password.
    pub password_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: 1,
            username: "alice".into(),
            email: "a@x.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }
}
