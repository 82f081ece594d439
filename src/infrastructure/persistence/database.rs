//! Connection pool construction and schema migrations.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Migrations embedded from the crate's `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Pool settings applied by [`connect`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Opens a SQLite pool for `database_url`.
///
/// The database file and its parent directory are created when missing.
/// Foreign keys are enforced on every connection so that deleting a
/// publisher cascades to its books.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the directory cannot be
/// created, or the connection fails.
pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database URL '{database_url}'"))?
        .create_if_missing(true)
        .foreign_keys(true);

    ensure_parent_dir(options.get_filename())?;

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

/// Applies all pending migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to apply migrations")
}

/// Creates the directory holding a file-backed database.
fn ensure_parent_dir(filename: &Path) -> Result<()> {
    if filename.as_os_str().is_empty() || filename == Path::new(":memory:") {
        return Ok(());
    }

    match filename.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
            tracing::info!(dir = %dir.display(), "Created data directory");
            Ok(())
        }
        _ => Ok(()),
    }
}
