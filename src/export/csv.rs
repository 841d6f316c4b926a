//! CSV export functionality.
//!
//! One row per book, columns in [`BOOK_COLUMNS`] order. The header is always
//! written, even for an empty table.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::WriterBuilder;
use log::debug;

use crate::error_handling::ExportError;
use crate::models::{BookTable, BOOK_COLUMNS};

use super::ensure_parent_dir;

/// Writes `table` to `path` as CSV, replacing any existing file.
///
/// # Returns
///
/// Returns the number of records written, or an error if export fails.
pub fn write_csv(path: &Path, table: &BookTable) -> Result<usize, ExportError> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Header is written by hand so empty tables still get one
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));
    writer.write_record(BOOK_COLUMNS)?;

    for record in table {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(table.len())
}
