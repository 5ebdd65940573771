//! Route definitions for the InkHub HTTP API.
//!
//! All resource routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use inkhub_core::config::AppConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::health::welcome))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Account endpoints: register, login, lookup, own profile
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register))
        .route("/users", get(handlers::user::list_users))
        .route("/users/login", post(handlers::user::login))
        .route("/users/profile", put(handlers::user::update_profile))
        .route("/users/profile", delete(handlers::user::delete_profile))
        .route("/users/{username}", get(handlers::user::get_user))
}

/// Post CRUD
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(handlers::post::create_post))
        .route(
            "/posts/by-email/{email}",
            get(handlers::post::list_posts_by_email),
        )
        .route("/posts/{id}", put(handlers::post::update_post))
        .route("/posts/{id}", delete(handlers::post::delete_post))
}

/// Comment endpoints
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", post(handlers::comment::create_comment))
        .route(
            "/comments/my-comments",
            get(handlers::comment::list_my_comments),
        )
        .route("/comments/{id}", delete(handlers::comment::delete_comment))
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::Any;

    let cors_config = &config.server.cors;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
