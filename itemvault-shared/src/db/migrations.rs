/// Database migration runner
///
/// Migrations live in `itemvault-shared/migrations/` and are embedded into
/// the binary at compile time with `sqlx::migrate!`, so a deployed server
/// creates its own schema on boot.
///
/// # Example
///
/// ```no_run
/// use itemvault_shared::db::pool::{create_pool, DatabaseConfig};
/// use itemvault_shared::db::migrations::run_migrations;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::postgres::PgPool;
use tracing::{error, info};

/// Runs all pending database migrations
///
/// # Errors
///
/// Returns an error if a migration fails to apply or the recorded checksum
/// of an applied migration no longer matches its file.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    match sqlx::migrate!("./migrations").run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Migration failed");
            Err(e)
        }
    }
}
