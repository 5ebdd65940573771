//! Session establishment and resolution.

pub mod manager;

pub use manager::SessionManager;
