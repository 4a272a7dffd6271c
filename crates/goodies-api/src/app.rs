//! Application builder: wires router, middleware and state into an Axum app.

use axum::{Router, middleware as axum_middleware};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use goodies_core::config::AppConfig;
use goodies_core::error::AppError;
use goodies_core::result::AppResult;
use goodies_database::StoreManager;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Connects the store, binds the listener, and serves until Ctrl+C.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting Goodies server...");

    let store = StoreManager::connect(&config).await?;
    info!(provider = store.provider(), "Document store ready");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Goodies server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Goodies server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
