//! JSON export functionality.
//!
//! Writes the table as a single JSON array of row objects.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error_handling::ExportError;
use crate::models::BookTable;

use super::ensure_parent_dir;

/// Writes `table` to `path` as a JSON array, replacing any existing file.
///
/// # Returns
///
/// Returns the number of records written, or an error if export fails.
pub fn write_json(path: &Path, table: &BookTable) -> Result<usize, ExportError> {
    ensure_parent_dir(path)?;
    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, table.rows())?;
    writer.flush().map_err(io_err)?;

    debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(table.len())
}
