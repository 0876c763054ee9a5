pub mod migrations;
pub mod models;
pub mod shifts;

use anyhow::{Context as _, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use std::path::Path;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn create_connection(database_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create database directory {}", parent.display()))?;
    }

    let connect_options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePool::connect_with(connect_options)
        .await
        .with_context(|| format!("failed to open database {}", database_path.display()))?;

    // Run migrations
    migrations::run_migrations(&pool).await?;

    Ok(pool)
}

/// Single-connection in-memory database with the schema applied.
///
/// Every connection to `:memory:` is its own database, so the pool is capped
/// at one connection.
#[cfg(test)]
pub(crate) async fn create_memory_connection() -> Result<SqlitePool> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().in_memory(true))
        .await?;

    migrations::run_migrations(&pool).await?;

    Ok(pool)
}
