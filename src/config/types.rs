//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CHART_FILE_NAME, DB_CONN_STRING_ENV, DEFAULT_BASE_URL, DEFAULT_FIELDS, DEFAULT_LIMIT,
    DEFAULT_SORT, DEFAULT_SUBJECT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, VISUALS_DIR,
};
use crate::fetch::SearchQuery;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Pipeline configuration.
///
/// Parsed from the command line by `clap`; every flag has a default, so the
/// binary runs with no arguments. Library callers can build it directly.
///
/// # Examples
///
/// ```no_run
/// use book_pipeline::Config;
///
/// let config = Config {
///     subject: "science_fiction".to_string(),
///     limit: 25,
///     db_conn_string: Some("sqlite:books.db?mode=rwc".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "book_pipeline",
    about = "Fetches books from Open Library, cleans them, stores them and charts them."
)]
pub struct Config {
    /// Subject to search for
    #[arg(long, default_value = DEFAULT_SUBJECT)]
    pub subject: String,

    /// Comma-separated list of fields requested from the API
    #[arg(long, default_value = DEFAULT_FIELDS)]
    pub fields: String,

    /// Sort order passed to the API
    #[arg(long, default_value = DEFAULT_SORT)]
    pub sort_by: String,

    /// Maximum number of books to request
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Catalog API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory that receives books.csv, books.json and visuals/
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Database connection string (e.g. sqlite:books.db?mode=rwc)
    #[arg(long, env = DB_CONN_STRING_ENV, hide_env_values = true)]
    pub db_conn_string: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Do not render the chart
    #[arg(long)]
    pub skip_chart: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// The catalog query described by this configuration.
    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::new(&self.subject, &self.fields, &self.sort_by, self.limit)
    }

    /// Where the count plot is written.
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(VISUALS_DIR).join(CHART_FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            fields: DEFAULT_FIELDS.to_string(),
            sort_by: DEFAULT_SORT.to_string(),
            limit: DEFAULT_LIMIT,
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            db_conn_string: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            skip_chart: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
