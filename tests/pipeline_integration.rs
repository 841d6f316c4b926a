//! Integration tests for run_pipeline
//!
//! These tests verify the stage sequencing:
//! - Fetch → clean → save → fetch-back on a healthy run
//! - Transport errors stop the run before any output is written
//! - Store failures are logged and the run carries on

use book_pipeline::{run_pipeline, FetchError, StoreError};
use reqwest::StatusCode;
use serde_json::json;
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{create_test_db_file, raw_book, start_catalog, start_failing_catalog, test_config};

#[tokio::test]
async fn test_pipeline_happy_path() {
    let server = start_catalog(vec![
        raw_book("Dune", &["Frank Herbert"], 1965, 4.3),
        raw_book("Dune", &["Frank Herbert"], 1965, 4.3),
        raw_book("Good Omens", &["Terry Pratchett", "Neil Gaiman"], 1990, 4.2),
        json!({"title": "No rating", "author_name": ["X"], "first_publish_year": 2000}),
    ])
    .await;
    let out = TempDir::new().expect("temp dir");
    let config = test_config(
        &server.uri(),
        out.path(),
        Some("sqlite::memory:".to_string()),
    );

    let report = run_pipeline(config).await.expect("pipeline should succeed");

    assert_eq!(report.raw_records, 4);
    assert_eq!(report.processed_rows, 3);
    assert_eq!(report.cleaned_rows, 2);
    assert_eq!(report.clean_report.duplicates, 1);
    assert_eq!(report.saved_rows, Some(2));
    assert_eq!(report.fetched_rows, Some(2));
    assert!(report.chart_path.is_none());

    assert_eq!(report.csv_path, out.path().join("books.csv"));
    let csv = std::fs::read_to_string(&report.csv_path).expect("read csv");
    assert!(csv.contains("\"Terry Pratchett, Neil Gaiman\""));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report.json_path).expect("read json"))
            .expect("parse json");
    // Files hold the processed table, before deduplication
    assert_eq!(json.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_pipeline_404_stops_before_any_output() {
    let server = start_failing_catalog(404).await;
    let out = TempDir::new().expect("temp dir");
    let config = test_config(
        &server.uri(),
        out.path(),
        Some("sqlite::memory:".to_string()),
    );

    let err = run_pipeline(config).await.expect_err("404 must fail the run");

    let fetch_err = err
        .downcast_ref::<FetchError>()
        .expect("error should be a transport error");
    assert_eq!(fetch_err.status(), Some(StatusCode::NOT_FOUND));
    assert!(!out.path().join("books.csv").exists());
    assert!(!out.path().join("books.json").exists());
}

#[tokio::test]
async fn test_pipeline_save_failure_still_fetches() {
    // A view named `books` makes DROP TABLE fail, while SELECT still works
    let db_dir = TempDir::new().expect("temp dir");
    let db_path = db_dir.path().join("books.db");
    let pool = create_test_db_file(&db_path).await;
    sqlx::query(
        "CREATE VIEW books AS
         SELECT 'Stale' AS title, 'Old Author' AS author, 1900 AS first_publish_year, 1.5 AS rating",
    )
    .execute(&pool)
    .await
    .expect("Failed to create view");
    pool.close().await;

    let server = start_catalog(vec![raw_book("Fresh", &["New Author"], 2020, 4.0)]).await;
    let out = TempDir::new().expect("temp dir");
    let config = test_config(
        &server.uri(),
        out.path(),
        Some(format!("sqlite:{}", db_path.display())),
    );

    let report = run_pipeline(config)
        .await
        .expect("store failures must not fail the run");

    assert_eq!(report.cleaned_rows, 1);
    assert_eq!(report.saved_rows, None);
    // The fetch still ran and returned what the store held before the failed save
    assert_eq!(report.fetched_rows, Some(1));
}

#[tokio::test]
async fn test_pipeline_unreachable_store_skips_chart() {
    let server = start_catalog(vec![raw_book("A", &["X"], 2000, 5.0)]).await;
    let out = TempDir::new().expect("temp dir");
    let missing = out.path().join("no-such-dir").join("books.db");
    let mut config = test_config(
        &server.uri(),
        out.path(),
        Some(format!("sqlite:{}", missing.display())),
    );
    config.skip_chart = false;

    let report = run_pipeline(config)
        .await
        .expect("store failures must not fail the run");

    assert_eq!(report.saved_rows, None);
    assert_eq!(report.fetched_rows, None);
    assert!(report.chart_path.is_none());
    assert!(!out.path().join("visuals").exists());
}

#[tokio::test]
async fn test_pipeline_without_connection_string_fails() {
    let server = start_catalog(vec![raw_book("A", &["X"], 2000, 5.0)]).await;
    let out = TempDir::new().expect("temp dir");
    let config = test_config(&server.uri(), out.path(), None);

    let err = run_pipeline(config)
        .await
        .expect_err("missing connection string");

    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::MissingConnectionString)
    ));
    // Cleaning already ran
    assert!(out.path().join("books.csv").exists());
}

#[tokio::test]
async fn test_pipeline_empty_catalog() {
    let server = start_catalog(vec![]).await;
    let out = TempDir::new().expect("temp dir");
    let mut config = test_config(
        &server.uri(),
        out.path(),
        Some("sqlite::memory:".to_string()),
    );
    config.skip_chart = false;

    let report = run_pipeline(config).await.expect("empty catalog is not an error");

    assert_eq!(report.raw_records, 0);
    assert_eq!(report.cleaned_rows, 0);
    assert_eq!(report.saved_rows, Some(0));
    assert_eq!(report.fetched_rows, Some(0));
    // An empty table still produces a chart with axes and no bars
    let chart = report.chart_path.expect("chart should be rendered");
    let bytes = std::fs::read(&chart).expect("read chart");
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[tokio::test]
async fn test_pipeline_renders_chart() {
    let server = start_catalog(vec![raw_book("A", &["X"], 2000, 5.0)]).await;
    let out = TempDir::new().expect("temp dir");
    let mut config = test_config(
        &server.uri(),
        out.path(),
        Some("sqlite::memory:".to_string()),
    );
    config.skip_chart = false;

    let report = run_pipeline(config).await.expect("pipeline should succeed");

    let expected = out.path().join("visuals").join("countplot.png");
    assert_eq!(report.chart_path.as_deref(), Some(expected.as_path()));
    let bytes = std::fs::read(&expected).expect("read chart");
    assert!(bytes.starts_with(b"\x89PNG"));
}
