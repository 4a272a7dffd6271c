//! Part catalogue handlers.

use axum::Json;
use axum::extract::{Path, State};

use goodies_core::types::{DeleteResult, Document, InsertOneResult};

use crate::error::ApiError;
use crate::extractors::{AdminUser, JsonBody};
use crate::state::AppState;

/// GET /parts
pub async fn list_parts(State(state): State<AppState>) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(state.part_repo.find_all().await?))
}

/// GET /parts/{id}
///
/// Responds with JSON `null` when no part has that id.
pub async fn get_part(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, ApiError> {
    Ok(Json(state.part_repo.find_by_id(&id).await?))
}

/// POST /parts
pub async fn create_part(
    State(state): State<AppState>,
    _admin: AdminUser,
    JsonBody(part): JsonBody<Document>,
) -> Result<Json<InsertOneResult>, ApiError> {
    Ok(Json(state.part_repo.insert(part).await?))
}

/// DELETE /parts/{id}
pub async fn delete_part(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, ApiError> {
    Ok(Json(state.part_repo.delete_by_id(&id).await?))
}
