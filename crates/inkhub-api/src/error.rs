//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use inkhub_core::error::{AppError, ErrorKind, FieldViolation};

/// Newtype over [`AppError`] carrying the HTTP mapping. Handlers return
/// `Result<_, ApiError>` and propagate domain errors with `?`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub message: String,
    /// Field-level violations; present only on validation failures.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<FieldViolation>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let status = match err.kind {
            // A login rejection is a 400, not a 401: no session gate was
            // involved, the submitted credentials were simply wrong.
            ErrorKind::Validation | ErrorKind::InvalidCredentials => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(
                    kind = %err.kind,
                    message = %err.message,
                    source = ?err.source,
                    "Internal server error"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            message: err.message,
            errors: err.violations,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_omits_empty_violations() {
        let body = ApiErrorResponse {
            message: "Unauthorized!".to_string(),
            errors: Vec::new(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Unauthorized!"}));
    }

    #[test]
    fn test_error_body_includes_violations() {
        let body = ApiErrorResponse {
            message: "Validation failed.".to_string(),
            errors: vec![FieldViolation {
                field: "email".to_string(),
                message: "Must be a valid email address".to_string(),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["errors"][0]["field"], "email");
    }
}
