//! Credential issuance: HS256-signed JWTs with a fixed lifetime.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use goodies_core::config::AuthConfig;
use goodies_core::error::AppError;

use super::claims::Claims;

/// Creates signed credentials. Stateless; holds only the key and TTL.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Credential lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails with a configuration error when no signing secret is set.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if !config.has_secret() {
            return Err(AppError::configuration(
                "auth.jwt_secret is not set (set ACCESS_TOKEN_SECRET)",
            ));
        }
        let ttl = i64::try_from(config.token_ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token_ttl_hours is out of range: {}",
                    config.token_ttl_hours
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
        })
    }

    /// Issues a credential for `identity`, valid from now for the TTL.
    pub fn issue(&self, identity: &str) -> Result<String, AppError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issues a credential as if at `issued_at`.
    pub fn issue_at(&self, identity: &str, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        if identity.is_empty() {
            return Err(AppError::validation("Cannot issue a credential for an empty identity"));
        }

        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::configuration("Credential expiry is out of range"))?;

        let claims = Claims {
            email: identity.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode credential: {e}")))
    }

    /// The configured credential lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
