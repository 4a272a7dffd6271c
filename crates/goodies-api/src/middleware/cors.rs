//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use goodies_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration. `"*"` means any.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let wildcard = |values: &[String]| values.iter().any(|v| v == "*");

    let mut layer = CorsLayer::new()
        .allow_methods(
            config
                .allowed_methods
                .iter()
                .filter_map(|m| m.parse::<Method>().ok())
                .collect::<Vec<_>>(),
        )
        .max_age(Duration::from_secs(config.max_age_seconds));

    layer = if wildcard(&config.allowed_origins) {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        )
    };

    if wildcard(&config.allowed_headers) {
        layer.allow_headers(Any)
    } else {
        layer.allow_headers(
            config
                .allowed_headers
                .iter()
                .filter_map(|h| h.parse::<HeaderName>().ok())
                .collect::<Vec<_>>(),
        )
    }
}
