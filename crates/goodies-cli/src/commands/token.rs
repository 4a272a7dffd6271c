//! Credential utilities.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde_json::json;

use goodies_auth::jwt::JwtEncoder;
use goodies_core::config::AppConfig;
use goodies_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Sign a credential for an email with the configured secret
    Issue {
        /// Identity to embed in the credential
        email: String,
    },
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        TokenCommand::Issue { email } => {
            let encoder = JwtEncoder::new(&config.auth)?;
            let issued_at = Utc::now();
            let token = encoder.issue_at(email, issued_at)?;
            let expires_at = issued_at
                .checked_add_signed(encoder.ttl())
                .ok_or_else(|| AppError::configuration("Credential expiry is out of range"))?;

            match format {
                OutputFormat::Json => output::print_json(&json!({
                    "email": email,
                    "token": token,
                    "expiresAt": expires_at.to_rfc3339(),
                })),
                OutputFormat::Text => {
                    output::print_kv("Email", email);
                    output::print_kv("Expires", &expires_at.to_rfc3339());
                    println!("{token}");
                }
            }
        }
    }
    Ok(())
}
