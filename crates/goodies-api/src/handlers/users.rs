//! User record handlers: sign-in upsert, profile, admin promotion.

use axum::Json;
use axum::extract::{Path, State};
use tracing::info;

use goodies_core::types::{DeleteResult, Document, UpdateResult};
use goodies_entity::user::ProfileUpdate;

use crate::dto::response::{AdminStatus, UpsertUserResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser, JsonBody};
use crate::state::AppState;

/// PUT /users/{email}
///
/// Creates or updates the user and hands back a fresh credential for them.
pub async fn upsert_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    JsonBody(profile): JsonBody<Document>,
) -> Result<Json<UpsertUserResponse>, ApiError> {
    let token = state.jwt_encoder.issue(&email)?;
    let result = state.user_repo.upsert_by_email(&email, profile).await?;

    Ok(Json(UpsertUserResponse { result, token }))
}

/// GET /user
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(state.user_repo.find_all().await?))
}

/// GET /admin/{email}
pub async fn admin_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AdminStatus>, ApiError> {
    let admin = state.role_authorizer.is_admin(&email).await?;
    Ok(Json(AdminStatus { admin }))
}

/// PUT /user/admin/{email}
pub async fn make_admin(
    State(state): State<AppState>,
    AdminUser(granted_by): AdminUser,
    Path(email): Path<String>,
) -> Result<Json<UpdateResult>, ApiError> {
    let result = state.user_repo.promote_to_admin(&email).await?;
    if result.matched_count > 0 {
        info!(email = %email, granted_by = %granted_by, "Admin role granted");
    }
    Ok(Json(result))
}

/// PUT /user/{id}
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<ProfileUpdate>,
) -> Result<Json<UpdateResult>, ApiError> {
    Ok(Json(state.user_repo.update_profile(&id, update).await?))
}

/// DELETE /user/{email}
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(email): Path<String>,
) -> Result<Json<DeleteResult>, ApiError> {
    Ok(Json(state.user_repo.delete_by_email(&email).await?))
}
