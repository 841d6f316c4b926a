//! Database connection management.
//!
//! The pipeline holds exactly one connection for the whole run, so the pool is
//! capped at one connection that never idles out. This also keeps
//! `sqlite::memory:` databases alive between the save and the fetch.

use std::str::FromStr;

use log::{debug, error};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::StoreError;

/// Opens the database described by `conn_string`.
///
/// Missing SQLite database files are created unless the connection string
/// asks for read-only mode.
///
/// # Errors
///
/// Returns `StoreError::ConnectError` if the connection string is invalid or
/// the database cannot be opened.
pub async fn connect(conn_string: &str) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(conn_string)
        .map_err(|e| {
            error!("Invalid database connection string: {e}");
            StoreError::ConnectError(e)
        })?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            StoreError::ConnectError(e)
        })?;

    debug!("Connected to database");
    Ok(pool)
}
