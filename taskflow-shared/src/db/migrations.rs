/// Database migration runner
///
/// This module applies the schema migrations embedded from the workspace
/// `migrations/` directory using sqlx's migration system.
///
/// # Migration Files
///
/// Each migration is a `{timestamp}_{name}.sql` file applied exactly once;
/// applied versions are tracked in the `_sqlx_migrations` table.
///
/// # Example
///
/// ```no_run
/// use taskflow_shared::db::pool::{create_pool, DatabaseConfig};
/// use taskflow_shared::db::migrations::run_migrations;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite:taskflow.db".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     run_migrations(&pool).await?;
///
///     Ok(())
/// }
/// ```

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Runs all pending database migrations
///
/// # Errors
///
/// Returns an error if:
/// - A migration file is malformed
/// - A migration fails to execute
/// - The database connection is lost during migration
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("../migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
