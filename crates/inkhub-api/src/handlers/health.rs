//! Welcome and health probes.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /
pub async fn welcome() -> &'static str {
    "Welcome to our blogging app!"
}

/// GET /api/health
///
/// Liveness only; deliberately touches no backing store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
