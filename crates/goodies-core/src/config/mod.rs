//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! layered TOML files and environment variables. Each sub-module represents
//! a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::{DatabaseConfig, StoreConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Prefix for structured environment overrides (`GOODIES__AUTH__JWT_SECRET`).
const ENV_PREFIX: &str = "GOODIES";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Document store backend.
    #[serde(default)]
    pub store: StoreConfig,
    /// Credential signing settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml`, `GOODIES__*`
    /// variables, and finally the plain `PORT`, `ACCESS_TOKEN_SECRET` and
    /// `DATABASE_URL` variables.
    pub fn load(env: &str) -> AppResult<Self> {
        Self::load_from("config/default", env)
    }

    /// Load configuration using `base` as the default file instead of
    /// `config/default`.
    pub fn load_from(base: &str, env: &str) -> AppResult<Self> {
        let builder = config::Config::builder()
            .add_source(File::with_name(base).required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let builder = apply_plain_env(builder, |key| std::env::var(key).ok())?;

        builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

/// Applies the unprefixed variables the service has always honoured.
fn apply_plain_env<F>(
    builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> AppResult<ConfigBuilder<DefaultState>>
where
    F: Fn(&str) -> Option<String>,
{
    let port = lookup("PORT")
        .map(|raw| {
            raw.parse::<u16>()
                .map(i64::from)
                .map_err(|_| AppError::configuration(format!("Invalid PORT value: '{raw}'")))
        })
        .transpose()?;

    Ok(builder
        .set_override_option("server.port", port)?
        .set_override_option("auth.jwt_secret", lookup("ACCESS_TOKEN_SECRET"))?
        .set_override_option("database.url", lookup("DATABASE_URL"))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn build_with(vars: &[(&str, &str)]) -> AppResult<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let builder = apply_plain_env(config::Config::builder(), |key| vars.get(key).cloned())?;
        Ok(builder.build()?.try_deserialize()?)
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = build_with(&[]).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.auth.token_ttl_hours, 10);
        assert!(!config.auth.has_secret());
        assert_eq!(config.store.provider, "postgres");
        assert_eq!(config.server.cors.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_plain_env_overrides() {
        let config = build_with(&[
            ("PORT", "7070"),
            ("ACCESS_TOKEN_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/goodies"),
        ])
        .unwrap();
        assert_eq!(config.server.port, 7070);
        assert_eq!(config.auth.jwt_secret, "s3cret");
        assert_eq!(config.database.url, "postgres://localhost/goodies");
    }

    #[test]
    fn test_invalid_port_is_configuration_error() {
        let err = build_with(&[("PORT", "not-a-port")]).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
