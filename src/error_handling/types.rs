//! Error type definitions.
//!
//! One error enum per pipeline stage, plus initialization failures.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::{Error as ReqwestError, StatusCode};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Transport errors raised while querying the catalog API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The API answered with anything other than 200 OK.
    #[error("HTTP status {status} for url ({url})")]
    Status {
        /// Status code returned by the server
        status: StatusCode,
        /// Final request URL, including the query string
        url: String,
    },

    /// The body was not a valid search response.
    #[error("Failed to decode search response: {0}")]
    Decode(#[source] ReqwestError),
}

impl FetchError {
    /// Status code carried by the error, if the server responded at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Request(e) | FetchError::Decode(e) => e.status(),
        }
    }
}

/// Errors writing the cleaned table to CSV or JSON.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Creating or flushing an output file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the cleaner.
#[derive(Error, Debug)]
pub enum CleanError {
    /// `clean` was called before `process`.
    #[error("Data has not been processed yet. Call process() before cleaning data.")]
    NotProcessed,

    /// The processed table could not be written out.
    #[error("Failed to export processed data: {0}")]
    Export(#[from] ExportError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No connection string was configured.
    #[error("No database connection string; set DB_CONN_STRING or pass --db-conn-string")]
    MissingConnectionString,

    /// Opening the database failed.
    #[error("Database connection error: {0}")]
    ConnectError(#[source] sqlx::Error),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Errors rendering the chart.
#[derive(Error, Debug)]
pub enum VisualizeError {
    /// The output directory could not be created.
    #[error("Failed to prepare {}: {source}", path.display())]
    Io {
        /// Directory being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The drawing backend reported an error.
    #[error("Chart rendering failed: {0}")]
    DrawError(String),
}
