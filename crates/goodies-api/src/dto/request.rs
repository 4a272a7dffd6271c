//! Request DTOs.

use serde::Deserialize;

/// Query string for `GET /orders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersQuery {
    /// Scope the listing to this owner. Requires a matching credential.
    pub email: Option<String>,
}
