//! The email-like identifier that names a user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A verified user identity (email).
///
/// Doubles as the lookup key for the user's stored role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wraps an email string.
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// The email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identity names the same user as `email`.
    pub fn matches(&self, email: &str) -> bool {
        self.0 == email
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Identity {
    fn from(email: String) -> Self {
        Self(email)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
