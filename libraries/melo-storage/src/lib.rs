//! Melo Storage
//!
//! Catalog store implementations for Melo.
//!
//! # Architecture
//!
//! - **`SqliteCatalog`**: persistent catalog on `SQLite` via `sqlx`, with
//!   embedded migrations
//! - **`MemoryCatalog`**: process-local catalog used by tests and ephemeral runs
//! - **Vertical Slicing**: the `songs` module owns its queries
//!
//! Both implement `melo_core::CatalogStore`, so discovery code never knows
//! which one it is talking to.
//!
//! # Example
//!
//! ```rust,no_run
//! use melo_storage::{SqliteCatalog, create_pool, run_migrations};
//! use melo_core::{CatalogStore, FilterSpec};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://melo.db").await?;
//! run_migrations(&pool).await?;
//!
//! let catalog = SqliteCatalog::new(pool);
//! let everything = catalog.find_by_filter(&FilterSpec::default()).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod memory;

// Vertical slices
pub mod songs;

pub use context::SqliteCatalog;
pub use error::StorageError;
pub use memory::MemoryCatalog;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://melo.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // An in-memory database exists per connection, so it must not be pooled wider than one
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    Ok(pool)
}
