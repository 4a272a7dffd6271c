//! Response DTOs.

use serde::{Deserialize, Serialize};

use goodies_core::types::UpdateResult;

/// `PUT /users/{email}` response: the store result plus a fresh credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertUserResponse {
    pub result: UpdateResult,
    pub token: String,
}

/// `GET /admin/{email}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStatus {
    pub admin: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Active store backend.
    pub store: String,
    /// Whether the store answered the health check.
    pub store_reachable: bool,
}
