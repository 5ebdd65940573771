//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side session.
///
/// The token is the opaque value held by the client in a cookie; it
/// resolves to exactly one account identifier until it expires or the
/// account is deleted (the row cascades away with the user).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Opaque session token carried by the client.
    pub token: Uuid,
    /// The account this session authenticates as.
    pub user_id: i64,
    /// When the session was established.
    pub created_at: DateTime<Utc>,
    /// Absolute expiry; resolution fails closed past this instant.
    pub expires_at: DateTime<Utc>,
    /// Last time the session was used to authenticate a request.
    pub last_seen_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session has passed its absolute expiry.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_is_expired() {
        let mut session = Session {
            token: Uuid::new_v4(),
            user_id: 1,
            created_at: Utc::now(),
            expires_at: Utc::now() + Duration::hours(1),
            last_seen_at: Utc::now(),
        };
        assert!(!session.is_expired());

        session.expires_at = Utc::now() - Duration::seconds(1);
        assert!(session.is_expired());
    }
}
