// Fetch module tests.

use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn fetcher_for(server: &MockServer) -> BookFetcher {
    BookFetcher::new(reqwest::Client::new(), server.uri())
}

#[test]
fn test_search_url_joins_base_and_path() {
    let fetcher = BookFetcher::new(reqwest::Client::new(), "https://openlibrary.org");
    assert_eq!(fetcher.search_url(), "https://openlibrary.org/search.json");
}

#[test]
fn test_search_url_tolerates_trailing_slash() {
    let fetcher = BookFetcher::new(reqwest::Client::new(), "http://localhost:8080/");
    assert_eq!(fetcher.search_url(), "http://localhost:8080/search.json");
}

#[test]
fn test_default_query_params() {
    let params = SearchQuery::default().params();
    assert_eq!(params[0], ("subject", "fiction".to_string()));
    assert_eq!(
        params[1],
        (
            "fields",
            "title,author_name,first_publish_year,ratings_sortable".to_string()
        )
    );
    assert_eq!(params[2], ("sort", "rating".to_string()));
    assert_eq!(params[3], ("limit", "100".to_string()));
}

#[tokio::test]
async fn test_fetch_returns_docs_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("subject", "fiction"))
        .and(query_param(
            "fields",
            "title,author_name,first_publish_year,ratings_sortable",
        ))
        .and(query_param("sort", "rating"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numFound": 12345,
            "docs": [
                {"title": "A", "author_name": ["X"], "first_publish_year": 2000, "ratings_sortable": 5},
                {"title": "B"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let docs = fetcher_for(&server)
        .fetch(&SearchQuery::default())
        .await
        .expect("fetch should succeed");

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].get("title"), Some(&json!("A")));
    assert!(docs[1].get("author_name").is_none());
}

#[tokio::test]
async fn test_fetch_passes_custom_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("subject", "poetry"))
        .and(query_param("fields", "title"))
        .and(query_param("sort", "new"))
        .and(query_param("limit", "3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"numFound": 0, "docs": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery::new("poetry", "title", "new", 3);
    let docs = fetcher_for(&server).fetch(&query).await.expect("fetch");
    assert!(docs.is_empty());
}

#[tokio::test]
async fn test_fetch_404_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch(&SearchQuery::default())
        .await
        .expect_err("404 must fail");

    assert!(matches!(err, FetchError::Status { .. }));
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_fetch_non_200_success_is_still_an_error() {
    // Only 200 counts as success
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch(&SearchQuery::default())
        .await
        .expect_err("204 must fail");
    assert_eq!(err.status(), Some(StatusCode::NO_CONTENT));
}

#[tokio::test]
async fn test_fetch_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch(&SearchQuery::default())
        .await
        .expect_err("bad body must fail");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_missing_docs_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"numFound": 3})))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch(&SearchQuery::default())
        .await
        .expect_err("missing docs must fail");
    assert!(matches!(err, FetchError::Decode(_)));
}
