//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `book_pipeline` library that handles:
//! - Environment variable loading (.env file, for `DB_CONN_STRING`)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use book_pipeline::initialization::init_logger_with;
use book_pipeline::{run_pipeline, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // .env must be loaded before parsing so clap sees DB_CONN_STRING
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_pipeline(config).await {
        Ok(report) => {
            println!(
                "✅ Fetched {} book{}, kept {} after cleaning in {:.1}s",
                report.raw_records,
                if report.raw_records == 1 { "" } else { "s" },
                report.cleaned_rows,
                report.elapsed_seconds
            );
            println!(
                "Exports: {}, {}",
                report.csv_path.display(),
                report.json_path.display()
            );
            if report.saved_rows.is_none() {
                println!("⚠️  Saving to the database failed - see log for details");
            }
            if let Some(chart) = report.chart_path {
                println!("Chart saved in {}", chart.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("book_pipeline error: {:#}", e);
            process::exit(1);
        }
    }
}
