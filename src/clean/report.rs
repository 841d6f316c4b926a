//! Cleaning statistics.

use std::fmt;

use super::extract::StagedBook;

/// Number of null cells per column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullCounts {
    pub title: usize,
    pub author: usize,
    pub first_publish_year: usize,
    pub rating: usize,
}

impl NullCounts {
    pub(crate) fn tally(rows: &[StagedBook]) -> Self {
        rows.iter().fold(Self::default(), |mut counts, row| {
            counts.title += usize::from(row.title.is_none());
            counts.author += usize::from(row.author.is_none());
            counts.first_publish_year += usize::from(row.first_publish_year.is_none());
            counts.rating += usize::from(row.rating.is_none());
            counts
        })
    }

    /// Total null cells across all columns.
    pub fn total(&self) -> usize {
        self.title + self.author + self.first_publish_year + self.rating
    }
}

impl fmt::Display for NullCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "title                 {}", self.title)?;
        writeln!(f, "author                {}", self.author)?;
        writeln!(f, "first_publish_year    {}", self.first_publish_year)?;
        write!(f, "rating                {}", self.rating)
    }
}

/// What a call to `clean` found and removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Rows in the table before cleaning
    pub rows_before: usize,
    /// Null cells per column before cleaning
    pub null_counts: NullCounts,
    /// Rows that repeat an earlier row exactly
    pub duplicates: usize,
    /// Rows left after dropping nulls and duplicates
    pub rows_after: usize,
}
