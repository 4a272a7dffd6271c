//! Goodies server: parts, reviews, users and orders over HTTP.
//!
//! Main entry point that loads configuration, initialises logging, and
//! starts the API server.

use tracing_subscriber::{EnvFilter, fmt};

use goodies_core::config::AppConfig;
use goodies_core::error::AppError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Starting Goodies v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = goodies_api::run_server(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("GOODIES_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
