//! Review handlers.

use axum::Json;
use axum::extract::State;

use goodies_core::types::{Document, InsertOneResult};

use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// GET /reviews
pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(state.review_repo.find_all().await?))
}

/// POST /reviews
pub async fn create_review(
    State(state): State<AppState>,
    _auth: AuthUser,
    JsonBody(review): JsonBody<Document>,
) -> Result<Json<InsertOneResult>, ApiError> {
    Ok(Json(state.review_repo.insert(review).await?))
}
