//! Database migration command.

use goodies_core::config::AppConfig;
use goodies_core::error::AppError;
use goodies_database::DatabasePool;
use goodies_database::migration::run_migrations;

use crate::output;

/// Apply every pending migration to the configured database.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let pool = DatabasePool::connect(&config.database).await?;

    println!("Running database migrations...");
    run_migrations(pool.pool()).await?;
    output::print_success("All migrations applied successfully.");
    Ok(())
}
