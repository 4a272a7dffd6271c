//! Greeting and health check handlers.

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use tracing::warn;

use goodies_core::traits::DocumentStore;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html("<h1>HELLO GOODIES SERVER WORLD!!!!!</h1>")
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_reachable = match state.store.health_check().await {
        Ok(up) => up,
        Err(e) => {
            warn!(error = %e, "Store health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if store_reachable { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store.provider().to_string(),
        store_reachable,
    })
}
