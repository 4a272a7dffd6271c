//! Credential verification: the gate every protected request passes.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use goodies_core::config::AuthConfig;
use goodies_core::error::AppError;
use goodies_entity::user::Identity;

use super::claims::Claims;

/// Validates credentials against the shared secret and the current time.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if !config.has_secret() {
            return Err(AppError::configuration(
                "auth.jwt_secret is not set (set ACCESS_TOKEN_SECRET)",
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // The library accepts `now == exp`; `decode_token` closes that gap.
        validation.leeway = 0;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Verifies the raw `Authorization` header value.
    ///
    /// - absent header: unauthenticated (401)
    /// - anything that does not decode to a live credential: forbidden (403)
    ///
    /// The token is taken positionally as the second space-separated
    /// segment; the scheme word is not checked, so a malformed header
    /// simply yields a token that fails verification.
    pub fn verify(&self, raw_header: Option<&str>) -> Result<Identity, AppError> {
        let header =
            raw_header.ok_or_else(|| AppError::unauthenticated("UnAuthorized access"))?;
        let claims = self.decode_token(bearer_token(header))?;
        Ok(claims.identity())
    }

    /// Decodes and validates a bare token string.
    ///
    /// A credential is valid strictly before its `exp` second.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Credential rejected");
                AppError::forbidden("Forbidden access")
            })?;

        if claims.is_expired() {
            debug!(exp = claims.exp, "Credential rejected at expiry");
            return Err(AppError::forbidden("Forbidden access"));
        }
        Ok(claims)
    }
}

/// Second space-separated segment of the header, or `""` when missing.
fn bearer_token(header: &str) -> &str {
    header.split(' ').nth(1).unwrap_or("")
}
