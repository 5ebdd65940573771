//! Concrete repository implementations, one per table.

pub mod comment;
pub mod post;
pub mod session;
pub mod user;

pub use comment::CommentRepository;
pub use post::PostRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
