//! Shared test helpers for integration tests.
//!
//! The router is built over a lazily-connected pool, so requests that
//! must be rejected before any store access (missing or garbage session
//! cookies, validation failures) are asserted without a database.
//!
//! Store-backed tests use [`TestApp::with_database`], which is gated on
//! `DATABASE_URL`: when the variable is unset those tests are skipped.

// Not every test binary exercises every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use inkhub_api::state::AppState;
use inkhub_auth::password::hasher::PasswordHasher;
use inkhub_auth::session::manager::SessionManager;
use inkhub_core::config::AppConfig;
use inkhub_database::connection::DatabasePool;
use inkhub_database::repositories::comment::CommentRepository;
use inkhub_database::repositories::post::PostRepository;
use inkhub_database::repositories::session::SessionRepository;
use inkhub_database::repositories::user::UserRepository;
use inkhub_service::comment::service::CommentService;
use inkhub_service::post::service::PostService;
use inkhub_service::user::service::UserService;

/// A response captured from the router.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body, or `Value::Null` for non-JSON bodies.
    pub body: Value,
    /// Raw body text.
    pub text: String,
    /// Session token from a `Set-Cookie` header, when one was issued.
    pub session_token: Option<String>,
}

/// Test application context driving the real router in-process.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Application config.
    pub config: AppConfig,
    /// The pool backing the router, for direct row assertions.
    pub db_pool: PgPool,
}

impl TestApp {
    /// Builds the full application wiring over a lazy pool.
    pub fn new() -> Self {
        let config = AppConfig::default();
        let db = DatabasePool::connect_lazy(&config.database)
            .expect("Failed to build lazy test pool");
        Self::build(config, db)
    }

    /// Builds the full application wiring over a real pool, with
    /// migrations applied. Returns `None` when `DATABASE_URL` is unset
    /// so store-backed tests skip instead of failing.
    pub async fn with_database() -> Option<Self> {
        let url = std::env::var("DATABASE_URL").ok()?;

        let mut config = AppConfig::default();
        config.database.url = url;

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to the test database");
        inkhub_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations against the test database");

        Some(Self::build(config, db))
    }

    fn build(config: AppConfig, db: DatabasePool) -> Self {
        let db_pool = db.pool().clone();

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
        let post_repo = Arc::new(PostRepository::new(db_pool.clone()));
        let comment_repo = Arc::new(CommentRepository::new(db_pool.clone()));

        let hasher =
            Arc::new(PasswordHasher::new(&config.auth).expect("Failed to build test hasher"));
        let session_manager = Arc::new(SessionManager::new(
            Arc::clone(&user_repo),
            Arc::clone(&session_repo),
            Arc::clone(&hasher),
            config.session.clone(),
        ));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&hasher),
            &config.auth,
        ));
        let post_service = Arc::new(PostService::new(
            Arc::clone(&post_repo),
            Arc::clone(&user_repo),
        ));
        let comment_service = Arc::new(CommentService::new(Arc::clone(&comment_repo)));

        let state = AppState {
            config: Arc::new(config.clone()),
            session_manager,
            user_service,
            post_service,
            comment_service,
        };

        Self {
            router: inkhub_api::router::build_router(state),
            config,
            db_pool,
        }
    }

    /// Sends a request through the router and captures the response.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        session_cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = session_cookie {
            builder = builder.header(
                header::COOKIE,
                format!("{}={token}", self.config.session.cookie_name),
            );
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router returned an infallible error");

        let status = response.status();
        let session_token = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .and_then(|pair| pair.split_once('='))
            .filter(|(name, _)| *name == self.config.session.cookie_name)
            .map(|(_, token)| token.to_string());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let text = String::from_utf8_lossy(&bytes).to_string();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            text,
            session_token,
        }
    }
}
