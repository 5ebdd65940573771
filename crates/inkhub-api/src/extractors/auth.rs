//! `CurrentUser` extractor — resolves the session cookie to a principal.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use inkhub_core::error::AppError;
use inkhub_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The fixed 401 body for every authentication miss: no cookie,
/// unparseable token, unknown or expired session, vanished account.
pub const AUTH_REQUIRED: &str = "User is not authenticated. Access denied.";

/// Extracted authenticated account, available to handlers that declare it.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(state.session_manager.cookie_name())
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::unauthenticated(AUTH_REQUIRED))?;

        let user = state
            .session_manager
            .resolve(&token)
            .await?
            .ok_or_else(|| AppError::unauthenticated(AUTH_REQUIRED))?;

        Ok(CurrentUser(user))
    }
}
