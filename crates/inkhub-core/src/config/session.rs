//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Absolute session lifetime in hours. There is no logout endpoint;
    /// expiry and account deletion are the only ways a session dies.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_hours: default_ttl_hours(),
        }
    }
}

fn default_cookie_name() -> String {
    "inkhub_session".to_string()
}

fn default_ttl_hours() -> u64 {
    24
}
