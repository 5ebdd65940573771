//! # inkhub-auth
//!
//! Authentication and authorization for the Inkhub blogging platform.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `session` — session establishment and per-request resolution
//! - `authz` — the ownership predicate gating every owned-resource mutation

pub mod authz;
pub mod password;
pub mod session;

pub use authz::{Owned, ensure_owner, is_owner};
pub use password::PasswordHasher;
pub use session::SessionManager;
