//! Cleaned book entity and the table that holds it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column names, in storage and export order.
pub const BOOK_COLUMNS: [&str; 4] = ["title", "author", "first_publish_year", "rating"];

/// A cleaned book row. Every field is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title
    pub title: String,
    /// Author names joined with ", "
    pub author: String,
    /// Year of first publication
    pub first_publish_year: i64,
    /// Catalog rating (never zero)
    pub rating: f64,
}

impl BookRecord {
    /// Creates a new record.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        first_publish_year: i64,
        rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            first_publish_year,
            rating,
        }
    }

    fn cells(&self) -> [String; 4] {
        [
            self.title.clone(),
            self.author.clone(),
            self.first_publish_year.to_string(),
            self.rating.to_string(),
        ]
    }
}

/// An ordered collection of [`BookRecord`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookTable {
    rows: Vec<BookRecord>,
}

impl BookTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing rows, preserving their order.
    pub fn from_rows(rows: Vec<BookRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[BookRecord] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<BookRecord> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.rows.iter()
    }

    /// First `n` rows, for previews.
    pub fn head(&self, n: usize) -> BookTable {
        Self::from_rows(self.rows.iter().take(n).cloned().collect())
    }
}

impl FromIterator<BookRecord> for BookTable {
    fn from_iter<I: IntoIterator<Item = BookRecord>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

impl IntoIterator for BookTable {
    type Item = BookRecord;
    type IntoIter = std::vec::IntoIter<BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a BookTable {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Renders the table as left-aligned columns with a row index.
impl fmt::Display for BookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return write!(f, "Empty table [{}]", BOOK_COLUMNS.join(", "));
        }

        let cells: Vec<[String; 4]> = self.rows.iter().map(BookRecord::cells).collect();
        let mut widths = BOOK_COLUMNS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let index_width = (self.rows.len() - 1).to_string().len();

        write!(f, "{:index_width$}", "")?;
        for (name, width) in BOOK_COLUMNS.iter().zip(widths) {
            write!(f, "  {name:<width$}")?;
        }
        for (i, row) in cells.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{i:<index_width$}")?;
            for (cell, width) in row.iter().zip(widths) {
                write!(f, "  {cell:<width$}")?;
            }
        }
        Ok(())
    }
}
