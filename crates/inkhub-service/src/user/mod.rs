//! Account services.

pub mod service;

pub use service::{UpdateProfileData, UserService};
