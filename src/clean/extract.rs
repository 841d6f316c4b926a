//! Field extraction from raw catalog documents.
//!
//! A field counts as present only when it is "truthy": non-empty strings,
//! non-zero numbers. A zero rating is therefore treated as missing.

use serde_json::Value;

use crate::fetch::RawRecord;
use crate::models::BookRecord;

/// A pre-clean row. Columns are nullable so the cleaner can count and drop nulls.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StagedBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub first_publish_year: Option<i64>,
    pub rating: Option<f64>,
}

/// Full-row identity used for duplicate detection. Ratings compare by bit pattern.
pub(crate) type RowKey = (Option<String>, Option<String>, Option<i64>, Option<u64>);

impl StagedBook {
    /// Extracts the four columns from a raw document.
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            title: raw.get("title").and_then(truthy_string),
            author: raw.get("author_name").and_then(join_authors),
            first_publish_year: raw.get("first_publish_year").and_then(truthy_year),
            rating: raw.get("ratings_sortable").and_then(truthy_rating),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.title.is_some()
            && self.author.is_some()
            && self.first_publish_year.is_some()
            && self.rating.is_some()
    }

    pub fn to_record(&self) -> Option<BookRecord> {
        Some(BookRecord {
            title: self.title.clone()?,
            author: self.author.clone()?,
            first_publish_year: self.first_publish_year?,
            rating: self.rating?,
        })
    }

    pub fn key(&self) -> RowKey {
        (
            self.title.clone(),
            self.author.clone(),
            self.first_publish_year,
            self.rating.map(f64::to_bits),
        )
    }
}

impl From<BookRecord> for StagedBook {
    fn from(record: BookRecord) -> Self {
        Self {
            title: Some(record.title),
            author: Some(record.author),
            first_publish_year: Some(record.first_publish_year),
            rating: Some(record.rating),
        }
    }
}

fn truthy_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Joins author names with ", " in input order. Non-string entries are skipped.
fn join_authors(value: &Value) -> Option<String> {
    let joined = match value {
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(name) => name.clone(),
        _ => return None,
    };
    (!joined.is_empty()).then_some(joined)
}

fn truthy_year(value: &Value) -> Option<i64> {
    value.as_i64().filter(|year| *year != 0)
}

/// Numeric ratings, or strings that parse as numbers. Zero and non-finite values count as missing.
fn truthy_rating(value: &Value) -> Option<f64> {
    let rating = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (rating != 0.0 && rating.is_finite()).then_some(rating)
}
