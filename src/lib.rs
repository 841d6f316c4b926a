//! book_pipeline library: a four-stage batch ETL over the Open Library catalog
//!
//! The stages run strictly in order, each handing a plain value to the next:
//! 1. **Fetch** raw search documents ([`BookFetcher`])
//! 2. **Clean** them into a [`BookTable`], writing `books.csv` / `books.json` ([`BookCleaner`])
//! 3. **Store** the table with replace-on-write semantics and read it back ([`BookStore`])
//! 4. **Visualize** the per-year counts as a PNG bar chart ([`BookVisualizer`])
//!
//! # Example
//!
//! ```no_run
//! use book_pipeline::{run_pipeline, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     db_conn_string: Some("sqlite:books.db?mode=rwc".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_pipeline(config).await?;
//! println!("Cleaned {} books", report.cleaned_rows);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The HTTP client and database driver are async; call the library from
//! within a Tokio runtime. A current-thread runtime is enough.

pub mod clean;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod storage;
pub mod visualize;

// Re-export public API
pub use clean::{BookCleaner, CleanReport, NullCounts};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{CleanError, ExportError, FetchError, StoreError, VisualizeError};
pub use fetch::{BookFetcher, RawRecord, SearchQuery};
pub use models::{BookRecord, BookTable};
pub use run::{run_pipeline, PipelineReport};
pub use storage::BookStore;
pub use visualize::{year_counts, BookVisualizer};

// Internal run module (contains the stage sequencing)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{error, info, warn};

    use crate::clean::{BookCleaner, CleanReport};
    use crate::config::Config;
    use crate::error_handling::StoreError;
    use crate::fetch::BookFetcher;
    use crate::initialization::init_client;
    use crate::models::BookTable;
    use crate::storage::BookStore;
    use crate::visualize::BookVisualizer;

    /// Results of a pipeline run.
    #[derive(Debug, Clone)]
    pub struct PipelineReport {
        /// Documents returned by the catalog API
        pub raw_records: usize,
        /// Rows kept by `process`
        pub processed_rows: usize,
        /// Rows left after `clean`
        pub cleaned_rows: usize,
        /// Null and duplicate statistics from `clean`
        pub clean_report: CleanReport,
        /// Rows written to the store, `None` if the save failed
        pub saved_rows: Option<usize>,
        /// Rows read back from the store, `None` if the fetch failed
        pub fetched_rows: Option<usize>,
        /// Chart location, `None` if no chart was rendered
        pub chart_path: Option<PathBuf>,
        /// Path of the CSV export
        pub csv_path: PathBuf,
        /// Path of the JSON export
        pub json_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs fetch, clean, save, fetch-back and chart in order.
    ///
    /// Fetch and clean failures end the run. Store failures are logged and
    /// the run carries on: a failed save is still followed by a fetch, and a
    /// failed fetch skips the chart.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be built
    /// - The catalog API call fails or returns a non-200 status
    /// - The processed table cannot be written to CSV/JSON
    /// - No database connection string is configured
    /// - The chart cannot be rendered
    pub async fn run_pipeline(config: Config) -> Result<PipelineReport> {
        let start = Instant::now();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let fetcher = BookFetcher::new(client, config.base_url.clone());
        let raw = fetcher
            .fetch(&config.search_query())
            .await
            .context("Failed to fetch books")?;

        let mut cleaner = BookCleaner::new(&config.output_dir);
        let processed_rows = cleaner
            .process(&raw)
            .context("Failed to process raw books")?;
        let (cleaned, clean_report) = cleaner
            .clean_with_report()
            .context("Failed to clean books")?;

        let conn_string = config
            .db_conn_string
            .as_deref()
            .ok_or(StoreError::MissingConnectionString)
            .context("Cannot open the book store")?;
        let (saved_rows, fetched) = persist(conn_string, &cleaned).await;

        let chart_path = match fetched.as_ref() {
            _ if config.skip_chart => {
                info!("Chart rendering disabled");
                None
            }
            None => {
                warn!("No data fetched from the store; skipping chart");
                None
            }
            Some(table) => Some(
                BookVisualizer::new(config.chart_path())
                    .render(table)
                    .context("Failed to render chart")?,
            ),
        };

        Ok(PipelineReport {
            raw_records: raw.len(),
            processed_rows,
            cleaned_rows: cleaned.len(),
            clean_report,
            saved_rows,
            fetched_rows: fetched.as_ref().map(BookTable::len),
            chart_path,
            csv_path: cleaner.csv_path(),
            json_path: cleaner.json_path(),
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    /// Best-effort save followed by a fetch-back. Failures are already logged
    /// by the store and show up here as `None`.
    async fn persist(conn_string: &str, table: &BookTable) -> (Option<usize>, Option<BookTable>) {
        let store = match BookStore::connect(conn_string).await {
            Ok(store) => store,
            Err(e) => {
                error!("Book store unavailable, skipping save and fetch: {e}");
                return (None, None);
            }
        };

        let saved = store.save(table).await.ok();
        if saved.is_none() {
            warn!("Save failed; fetching whatever the store currently holds");
        }
        let fetched = store.fetch().await.ok();

        store.close().await;
        (saved, fetched)
    }
}
