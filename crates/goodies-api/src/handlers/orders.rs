//! Order handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use tracing::debug;

use goodies_core::error::AppError;
use goodies_core::types::{DeleteResult, Document, InsertOneResult};
use goodies_entity::user::model::fields;

use crate::dto::request::OrdersQuery;
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser, JsonBody, authorization_header};
use crate::state::AppState;

/// GET /orders and GET /orders?email=
///
/// Without `email` this is the public listing. With `email` the caller must
/// hold a credential for that same identity and only their orders are
/// returned.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
    headers: HeaderMap,
) -> Result<Json<Vec<Document>>, ApiError> {
    let Some(email) = query.email else {
        return Ok(Json(state.order_repo.find_all().await?));
    };

    let identity = state.jwt_decoder.verify(authorization_header(&headers))?;
    if !identity.matches(&email) {
        debug!(identity = %identity, requested = %email, "Order listing identity mismatch");
        return Err(AppError::forbidden("forbidden access").into());
    }

    Ok(Json(state.order_repo.find_by(fields::EMAIL, email).await?))
}

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    _auth: AuthUser,
    JsonBody(order): JsonBody<Document>,
) -> Result<Json<InsertOneResult>, ApiError> {
    Ok(Json(state.order_repo.insert(order).await?))
}

/// DELETE /orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, ApiError> {
    Ok(Json(state.order_repo.delete_by_id(&id).await?))
}
