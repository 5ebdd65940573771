//! # inkhub-service
//!
//! Business logic service layer for InkHub. Each service orchestrates
//! repositories and authentication to implement application-level use
//! cases: account lifecycle, post publishing, and commenting.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod comment;
pub mod post;
pub mod user;

pub use comment::CommentService;
pub use post::PostService;
pub use user::UserService;
