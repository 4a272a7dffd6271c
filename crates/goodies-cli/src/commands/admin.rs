//! Admin role management commands.

use clap::{Args, Subcommand};

use goodies_core::config::AppConfig;
use goodies_core::error::AppError;
use goodies_database::StoreManager;
use goodies_database::repositories::UserRepository;

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Give an existing user the admin role
    Grant {
        /// Email of the user to promote
        email: String,
    },
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = StoreManager::connect(config).await?;
    let user_repo = UserRepository::new(store);

    match &args.command {
        AdminCommand::Grant { email } => {
            let result = user_repo.promote_to_admin(email).await?;
            if result.matched_count == 0 {
                return Err(AppError::not_found(format!("No user with email '{email}'")));
            }

            match format {
                OutputFormat::Json => output::print_json(&result),
                OutputFormat::Text if result.modified_count == 0 => {
                    output::print_warning(&format!("'{email}' is already an admin."));
                }
                OutputFormat::Text => {
                    output::print_success(&format!("'{email}' is now an admin."));
                }
            }
        }
    }
    Ok(())
}
