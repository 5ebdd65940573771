//! # inkhub-entity
//!
//! Domain entity models for Inkhub. Every struct in this crate represents a
//! database table row or a write payload for one. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod comment;
pub mod post;
pub mod session;
pub mod user;
