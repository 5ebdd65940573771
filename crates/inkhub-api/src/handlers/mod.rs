//! HTTP request handlers, organized by resource.

pub mod comment;
pub mod health;
pub mod post;
pub mod user;
