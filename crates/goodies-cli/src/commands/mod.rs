//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use goodies_core::config::AppConfig;
use goodies_core::error::AppError;

use crate::output::OutputFormat;

/// Goodies: parts, reviews, users and orders over HTTP
#[derive(Debug, Parser)]
#[command(name = "goodies", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (without extension)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay, read from `config/{env}.toml`
    #[arg(short, long, env = "GOODIES_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// Credential utilities
    Token(token::TokenArgs),
    /// Admin role management
    Admin(admin::AdminArgs),
}

impl Cli {
    /// Whether this invocation runs the server.
    pub fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve(_))
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(&self.config, &self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::Token(args) => token::execute(args, &config, self.format),
            Commands::Admin(args) => admin::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: load layered configuration
pub fn load_config(base: &str, env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(base, env)
}
