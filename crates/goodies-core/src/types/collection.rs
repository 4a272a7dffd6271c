//! The fixed set of document collections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named document collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Catalogue parts.
    Parts,
    /// Customer reviews.
    Reviews,
    /// User records (keyed by email).
    Users,
    /// Customer orders.
    Orders,
}

impl Collection {
    /// Collection name, also used as the backing table name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parts => "parts",
            Self::Reviews => "reviews",
            Self::Users => "users",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
