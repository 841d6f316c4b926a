// Shared test helpers for mock catalog servers, pipeline configs and databases.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::Path;

use serde_json::{json, Value};
use sqlx::SqlitePool;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use book_pipeline::{BookRecord, BookTable, Config, LogFormat, LogLevel};

/// A raw search document with all four fields present.
pub fn raw_book(title: &str, authors: &[&str], year: i64, rating: f64) -> Value {
    json!({
        "title": title,
        "author_name": authors,
        "first_publish_year": year,
        "ratings_sortable": rating
    })
}

/// Starts a mock catalog that answers `/search.json` with the given docs.
pub async fn start_catalog(docs: Vec<Value>) -> MockServer {
    let server = MockServer::start().await;
    let num_found = docs.len() * 10;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numFound": num_found,
            "docs": docs
        })))
        .mount(&server)
        .await;
    server
}

/// Starts a mock catalog that answers every request with `status`.
#[allow(dead_code)] // Used by other test files
pub async fn start_failing_catalog(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

/// Pipeline config pointed at a mock server and a scratch directory.
/// Chart rendering is off so tests do not depend on system fonts.
pub fn test_config(base_url: &str, output_dir: &Path, db_conn_string: Option<String>) -> Config {
    Config {
        base_url: base_url.to_string(),
        output_dir: output_dir.to_path_buf(),
        db_conn_string,
        timeout_seconds: 5,
        user_agent: "book_pipeline_test/1.0".to_string(),
        skip_chart: true,
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

/// Opens (creating if needed) a SQLite file for test setup.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_db_file(db_path: &Path) -> SqlitePool {
    SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path.display()))
        .await
        .expect("Failed to create test database")
}

/// Rows sorted by every column, for order-insensitive comparisons.
#[allow(dead_code)] // Used by other test files
pub fn sorted_rows(table: BookTable) -> Vec<BookRecord> {
    let mut rows = table.into_rows();
    rows.sort_by(|a, b| {
        a.title
            .cmp(&b.title)
            .then_with(|| a.author.cmp(&b.author))
            .then_with(|| a.first_publish_year.cmp(&b.first_publish_year))
            .then_with(|| a.rating.total_cmp(&b.rating))
    });
    rows
}
