//! Catalog API response types.

use serde::Deserialize;

/// A search result document exactly as the API returned it.
///
/// No field is guaranteed to be present.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Body of a `/search.json` response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Total number of matches in the catalog
    #[serde(rename = "numFound")]
    pub num_found: u64,
    /// The returned subset of matches
    pub docs: Vec<RawRecord>,
}
