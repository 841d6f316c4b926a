//! Export functionality for the cleaned book table.
//!
//! This module writes a [`BookTable`](crate::models::BookTable) to flat files:
//! - CSV with a header row and no index column
//! - JSON as an array of objects (one object per row)
//!
//! Both writers fully overwrite the target file and create missing parent
//! directories.

mod csv;
mod json;

use std::fs;
use std::path::Path;

use crate::error_handling::ExportError;

pub use self::csv::write_csv;
pub use self::json::write_json;

/// Creates the parent directory of `path` if it does not exist yet.
fn ensure_parent_dir(path: &Path) -> Result<(), ExportError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
