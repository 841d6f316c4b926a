//! Configuration constants.
//!
//! Defaults for the catalog query, output file names, the storage table and
//! chart geometry. CLI flags in [`super::Config`] fall back to these values.

// Catalog API
/// Base URL of the Open Library catalog API.
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
/// Search endpoint, appended to the base URL.
pub const SEARCH_PATH: &str = "/search.json";
pub const DEFAULT_SUBJECT: &str = "fiction";
pub const DEFAULT_FIELDS: &str = "title,author_name,first_publish_year,ratings_sortable";
pub const DEFAULT_SORT: &str = "rating";
pub const DEFAULT_LIMIT: u32 = 100;

/// HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent to the catalog API.
pub const DEFAULT_USER_AGENT: &str = concat!("book_pipeline/", env!("CARGO_PKG_VERSION"));

// Storage
/// Environment variable holding the database connection string.
pub const DB_CONN_STRING_ENV: &str = "DB_CONN_STRING";
/// Name of the relational table the cleaned books are written to.
pub const BOOKS_TABLE: &str = "books";

// Filesystem outputs (relative to the output directory)
pub const CSV_FILE_NAME: &str = "books.csv";
pub const JSON_FILE_NAME: &str = "books.json";
pub const VISUALS_DIR: &str = "visuals";
pub const CHART_FILE_NAME: &str = "countplot.png";

/// Chart canvas size in pixels (width, height).
pub const CHART_SIZE: (u32, u32) = (1500, 1000);

/// Number of rows shown when logging a table preview.
pub const PREVIEW_ROWS: usize = 5;
