//! Ownership authorization.
//!
//! Every mutation of an owned resource goes through the same gate: load
//! the resource, compare its owner reference to the principal, reject on
//! mismatch. The comparison lives here once instead of being repeated in
//! each handler.

use inkhub_core::error::AppError;
use inkhub_entity::comment::Comment;
use inkhub_entity::post::Post;
use inkhub_entity::user::User;

/// A resource carrying an immutable owner reference.
pub trait Owned {
    /// The owning account's identifier.
    fn owner_id(&self) -> i64;
}

impl Owned for Post {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

impl Owned for Comment {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

/// Whether the principal owns the resource.
pub fn is_owner<R: Owned>(principal: &User, resource: &R) -> bool {
    principal.id == resource.owner_id()
}

/// Rejects with a forbidden error unless the principal owns the resource.
pub fn ensure_owner<R: Owned>(principal: &User, resource: &R) -> Result<(), AppError> {
    if is_owner(principal, resource) {
        Ok(())
    } else {
        Err(AppError::forbidden("Unauthorized!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use inkhub_core::error::ErrorKind;

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@x.com"),
            password_hash: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn post(owner: i64) -> Post {
        Post {
            id: 42,
            title: "T".into(),
            content: "C".into(),
            published: false,
            user_id: owner,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn comment(owner: i64) -> Comment {
        Comment {
            id: 7,
            content: "hi".into(),
            post_id: 42,
            user_id: owner,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_passes() {
        let alice = user(1);
        assert!(is_owner(&alice, &post(1)));
        assert!(ensure_owner(&alice, &comment(1)).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let bob = user(2);
        assert!(!is_owner(&bob, &post(1)));

        let err = ensure_owner(&bob, &post(1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let err = ensure_owner(&bob, &comment(1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
