//! Application state shared across all handlers.

use std::sync::Arc;

use inkhub_auth::session::manager::SessionManager;
use inkhub_core::config::AppConfig;
use inkhub_service::comment::service::CommentService;
use inkhub_service::post::service::PostService;
use inkhub_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,
    /// Account service
    pub user_service: Arc<UserService>,
    /// Post service
    pub post_service: Arc<PostService>,
    /// Comment service
    pub comment_service: Arc<CommentService>,
}
