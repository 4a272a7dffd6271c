//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse permission label stored on a user record.
///
/// Only `admin` is distinguished; an absent role reads as `User`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrator.
    Admin,
    /// Ordinary user.
    #[default]
    User,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Reads a stored role value. Anything other than `"admin"` is an
    /// ordinary user, matching the exact-string check the gate performs.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("admin") => Self::Admin,
            _ => Self::User,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
