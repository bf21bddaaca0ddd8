// ABOUTME: Database connection management and schema setup
// ABOUTME: Builds the shared SQLite pool and applies the embedded migrations

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::StorageResult;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection settings for the store
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Opens the connection pool, creating the database file if needed, and migrates it.
pub async fn connect(config: &DbConfig) -> StorageResult<SqlitePool> {
    debug!(url = %config.url, "Connecting to database");

    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await?;

    // Configure SQLite settings
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database connection established"
    );

    migrate(&pool).await?;

    Ok(pool)
}

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &SqlitePool) -> StorageResult<()> {
    MIGRATOR.run(pool).await?;
    debug!("Database migrations completed");
    Ok(())
}
