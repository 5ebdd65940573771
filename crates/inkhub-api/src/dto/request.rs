//! Request DTOs with validation.
//!
//! Validation happens before any store access, and every violated
//! constraint is reported, not just the first.

use serde::{Deserialize, Serialize};
use validator::Validate;

use inkhub_core::error::{AppError, FieldViolation};

/// Runs a DTO's validators and collects all violations into a single
/// validation error, sorted by field for a stable wire order.
pub fn validate_request(req: &impl Validate) -> Result<(), AppError> {
    if let Err(errors) = req.validate() {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(|error| FieldViolation {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        return Err(AppError::validation_errors(violations));
    }
    Ok(())
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Login email.
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update request. Absent fields keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: Option<String>,
    /// New login email.
    #[validate(email(message = "Must be a valid email address"))]
    pub email: Option<String>,
    /// New plaintext password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: Option<String>,
}

/// Post creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Post title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Post body.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// Post update request. Absent fields keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New publication state.
    pub published: Option<bool>,
}

/// Comment creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    /// Comment body.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// The post being commented on.
    pub post_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkhub_core::error::ErrorKind;

    #[test]
    fn test_all_violations_are_collected() {
        let req = RegisterRequest {
            username: String::new(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };

        let err = validate_request(&req).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.violations.len(), 3);

        let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "password", "username"]);
    }

    #[test]
    fn test_valid_registration_passes() {
        let req = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_comment_request_uses_camel_case() {
        let req: CreateCommentRequest =
            serde_json::from_str(r#"{"content": "hi", "postId": 7}"#).unwrap();
        assert_eq!(req.post_id, 7);
    }
}
