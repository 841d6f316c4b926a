//! Catalog fetching.
//!
//! Issues a single GET against the Open Library search endpoint and hands the
//! raw documents to the cleaner. Non-200 responses are returned as
//! [`FetchError::Status`]; nothing is retried.

mod types;

use log::{debug, info};
use reqwest::StatusCode;

use crate::config::{DEFAULT_FIELDS, DEFAULT_LIMIT, DEFAULT_SORT, DEFAULT_SUBJECT, SEARCH_PATH};
use crate::error_handling::FetchError;

pub use types::{RawRecord, SearchResponse};

/// Query parameters for a catalog search.
///
/// Values are passed through to the API as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub subject: String,
    pub fields: String,
    pub sort_by: String,
    pub limit: u32,
}

impl SearchQuery {
    pub fn new(
        subject: impl Into<String>,
        fields: impl Into<String>,
        sort_by: impl Into<String>,
        limit: u32,
    ) -> Self {
        Self {
            subject: subject.into(),
            fields: fields.into(),
            sort_by: sort_by.into(),
            limit,
        }
    }

    /// Query-string pairs in the order the API documents them.
    fn params(&self) -> [(&'static str, String); 4] {
        [
            ("subject", self.subject.clone()),
            ("fields", self.fields.clone()),
            ("sort", self.sort_by.clone()),
            ("limit", self.limit.to_string()),
        ]
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECT, DEFAULT_FIELDS, DEFAULT_SORT, DEFAULT_LIMIT)
    }
}

/// Fetches raw book documents from the catalog API.
#[derive(Debug, Clone)]
pub struct BookFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl BookFetcher {
    /// Creates a fetcher for the API rooted at `base_url`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full search endpoint URL, without query string.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SEARCH_PATH)
    }

    /// Runs one search and returns its `docs` array.
    ///
    /// Logs the total number of matches next to the size of the returned subset.
    ///
    /// # Errors
    ///
    /// - `FetchError::Request` if the request could not be completed
    /// - `FetchError::Status` for any status other than 200
    /// - `FetchError::Decode` if the body is not a search response
    pub async fn fetch(&self, query: &SearchQuery) -> Result<Vec<RawRecord>, FetchError> {
        let url = self.search_url();
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        let body: SearchResponse = response.json().await.map_err(FetchError::Decode)?;
        info!("Total number of books: {}", body.num_found);
        info!(
            "Limiting to top {} books ({} returned)",
            query.limit,
            body.docs.len()
        );
        Ok(body.docs)
    }
}

#[cfg(test)]
mod tests;
