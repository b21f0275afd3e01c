//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Key under which the bearer token is persisted.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

fn default_token_key() -> String {
    "auth_token".to_string()
}
