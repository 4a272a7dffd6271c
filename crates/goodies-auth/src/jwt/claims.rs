//! JWT claims carried by every credential.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use goodies_entity::user::Identity;

/// Claims payload: the identity plus issue and expiry times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The identity (email) the credential asserts.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// The asserted identity.
    pub fn identity(&self) -> Identity {
        Identity::new(self.email.clone())
    }

    /// Whether the credential has expired at `now`. A credential is
    /// valid strictly before `exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Whether the credential has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
