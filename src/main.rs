//! InkHub Server — blogging platform backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use inkhub_core::config::AppConfig;
use inkhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("INKHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting InkHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = inkhub_database::connection::DatabasePool::connect(&config.database).await?;
    let db_pool = db.pool().clone();

    tracing::info!("Running database migrations...");
    inkhub_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(inkhub_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let session_repo = Arc::new(
        inkhub_database::repositories::session::SessionRepository::new(db_pool.clone()),
    );
    let post_repo = Arc::new(inkhub_database::repositories::post::PostRepository::new(
        db_pool.clone(),
    ));
    let comment_repo = Arc::new(
        inkhub_database::repositories::comment::CommentRepository::new(db_pool.clone()),
    );

    // Opportunistic cleanup; sessions are never destroyed by an endpoint.
    let expired = session_repo.delete_expired().await?;
    if expired > 0 {
        tracing::info!(count = expired, "Removed expired sessions");
    }

    // ── Step 3: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = Arc::new(inkhub_auth::password::hasher::PasswordHasher::new(
        &config.auth,
    )?);
    let session_manager = Arc::new(inkhub_auth::session::manager::SessionManager::new(
        Arc::clone(&user_repo),
        Arc::clone(&session_repo),
        Arc::clone(&password_hasher),
        config.session.clone(),
    ));

    // ── Step 4: Initialize services ──────────────────────────────
    tracing::info!("Initializing services...");
    let user_service = Arc::new(inkhub_service::user::service::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        &config.auth,
    ));
    let post_service = Arc::new(inkhub_service::post::service::PostService::new(
        Arc::clone(&post_repo),
        Arc::clone(&user_repo),
    ));
    let comment_service = Arc::new(inkhub_service::comment::service::CommentService::new(
        Arc::clone(&comment_repo),
    ));
    tracing::info!("Services initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let app_state = inkhub_api::state::AppState {
        config: Arc::new(config.clone()),
        session_manager: Arc::clone(&session_manager),
        user_service: Arc::clone(&user_service),
        post_service: Arc::clone(&post_service),
        comment_service: Arc::clone(&comment_service),
    };

    let app = inkhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("InkHub server listening on {addr}");

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("InkHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
