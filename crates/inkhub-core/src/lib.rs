//! # inkhub-core
//!
//! Core crate for Inkhub. Contains configuration schemas and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Inkhub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
