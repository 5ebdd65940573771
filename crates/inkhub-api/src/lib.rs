//! # inkhub-api
//!
//! HTTP API layer for InkHub built on Axum.
//!
//! Provides all REST endpoints, the session-cookie extractor, request and
//! response DTOs, and the domain-error to HTTP mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
