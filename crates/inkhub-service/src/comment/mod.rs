//! Comment services.

pub mod service;

pub use service::CommentService;
