//! Account handlers — registration, login, lookup, profile.

use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use inkhub_entity::session::Session;
use inkhub_service::user::service::UpdateProfileData;

use crate::dto::request::{LoginRequest, RegisterRequest, UpdateProfileRequest, validate_request};
use crate::dto::response::{LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Builds the session cookie carried by authenticated responses.
fn session_cookie(name: &str, session: &Session) -> Cookie<'static> {
    Cookie::build((name.to_string(), session.token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Builds the removal counterpart of the session cookie.
fn removal_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), ""))
        .path("/")
        .build()
}

/// POST /api/users
///
/// Registers an account and logs it in immediately: the response carries
/// a fresh session cookie alongside the confirmation message.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    validate_request(&req)?;

    let user = state
        .user_service
        .register(&req.username, &req.email, &req.password)
        .await?;

    let session = state.session_manager.create_session(&user).await?;
    let jar = jar.add(session_cookie(state.session_manager.cookie_name(), &session));

    Ok((jar, Json(MessageResponse::new("Account created successfully"))))
}

/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    validate_request(&req)?;

    let (user, session) = state.session_manager.login(&req.email, &req.password).await?;
    let jar = jar.add(session_cookie(state.session_manager.cookie_name(), &session));

    Ok((
        jar,
        Json(LoginResponse {
            message: "Logged in successfully".to_string(),
            user: UserResponse::from(&user),
        }),
    ))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_by_username(&username).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    validate_request(&req)?;

    let user = state
        .user_service
        .update_profile(
            &current_user,
            UpdateProfileData {
                username: req.username,
                email: req.email,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/users/profile
pub async fn delete_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    state.user_service.delete_profile(&current_user).await?;

    let jar = jar.remove(removal_cookie(state.session_manager.cookie_name()));

    Ok((
        jar,
        Json(MessageResponse::new("User profile was deleted successfully!")),
    ))
}
