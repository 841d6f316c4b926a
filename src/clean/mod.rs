//! Normalization and deduplication of raw catalog documents.
//!
//! Cleaning happens in two phases:
//! 1. [`BookCleaner::process`] extracts the four book columns from each raw
//!    document, keeps only documents where all four are present, and writes the
//!    resulting table to `books.csv` and `books.json`.
//! 2. [`BookCleaner::clean`] reports null and duplicate counts, then drops rows
//!    with nulls followed by exact duplicates.

mod extract;
mod report;

use std::collections::HashSet;
use std::path::PathBuf;

use log::{debug, info};

use crate::config::{CSV_FILE_NAME, JSON_FILE_NAME, PREVIEW_ROWS};
use crate::error_handling::CleanError;
use crate::export::{write_csv, write_json};
use crate::fetch::RawRecord;
use crate::models::BookTable;

use extract::StagedBook;

pub use report::{CleanReport, NullCounts};

/// Turns raw documents into a cleaned [`BookTable`].
#[derive(Debug)]
pub struct BookCleaner {
    output_dir: PathBuf,
    staged: Option<Vec<StagedBook>>,
}

impl BookCleaner {
    /// Creates a cleaner that writes its CSV and JSON files into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            staged: None,
        }
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(CSV_FILE_NAME)
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(JSON_FILE_NAME)
    }

    /// Builds the processed table from raw documents and writes it to disk.
    ///
    /// A document is kept only when title, author, first publish year and
    /// rating are all present and non-empty/non-zero. Replaces the result of
    /// any earlier `process` call.
    ///
    /// # Returns
    ///
    /// The number of rows kept.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::Export` if either output file cannot be written.
    pub fn process(&mut self, raw_records: &[RawRecord]) -> Result<usize, CleanError> {
        let staged: Vec<StagedBook> = raw_records
            .iter()
            .map(StagedBook::from_raw)
            .filter(StagedBook::is_complete)
            .collect();
        debug!("Kept {} of {} raw records", staged.len(), raw_records.len());

        let table = to_table(&staged);
        write_csv(&self.csv_path(), &table)?;
        write_json(&self.json_path(), &table)?;
        info!(
            "Wrote {} books to {} and {}",
            table.len(),
            self.csv_path().display(),
            self.json_path().display()
        );

        self.staged = Some(staged);
        Ok(table.len())
    }

    /// Drops rows with nulls, then exact duplicates, and returns the table.
    ///
    /// The cleaned rows replace the processed ones, so calling `clean` again
    /// returns the same table.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::NotProcessed` if `process` has not been called.
    pub fn clean(&mut self) -> Result<BookTable, CleanError> {
        self.clean_with_report().map(|(table, _)| table)
    }

    /// Same as [`clean`](Self::clean), also returning what was found and removed.
    pub fn clean_with_report(&mut self) -> Result<(BookTable, CleanReport), CleanError> {
        let staged = self.staged.as_mut().ok_or(CleanError::NotProcessed)?;

        let rows_before = staged.len();
        let null_counts = NullCounts::tally(staged);
        info!("Missing values in each column:\n{}", null_counts);

        let duplicates = count_duplicates(staged);
        info!("Number of duplicate rows: {}", duplicates);

        staged.retain(StagedBook::is_complete);
        let mut seen = HashSet::new();
        staged.retain(|row| seen.insert(row.key()));

        let table = to_table(staged);
        info!(
            "Fixed {} duplicates and dropped {} missing values.",
            duplicates,
            null_counts.total()
        );
        info!(
            "Here's a preview of the cleaned data:\n{}",
            table.head(PREVIEW_ROWS)
        );

        let report = CleanReport {
            rows_before,
            null_counts,
            duplicates,
            rows_after: table.len(),
        };
        Ok((table, report))
    }

    #[cfg(test)]
    fn with_staged(output_dir: impl Into<PathBuf>, staged: Vec<StagedBook>) -> Self {
        Self {
            output_dir: output_dir.into(),
            staged: Some(staged),
        }
    }
}

fn to_table(staged: &[StagedBook]) -> BookTable {
    staged.iter().filter_map(StagedBook::to_record).collect()
}

/// Rows equal to an earlier row, nulls included.
fn count_duplicates(rows: &[StagedBook]) -> usize {
    let mut seen = HashSet::new();
    rows.iter().filter(|row| !seen.insert(row.key())).count()
}
