//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Credential signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Must be supplied
    /// externally; an empty secret fails token issuance.
    #[serde(default)]
    pub jwt_secret: String,
    /// Credential lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_hours: default_token_ttl(),
        }
    }
}

impl AuthConfig {
    /// Whether a signing secret has been configured.
    pub fn has_secret(&self) -> bool {
        !self.jwt_secret.is_empty()
    }
}

fn default_token_ttl() -> u64 {
    10
}
