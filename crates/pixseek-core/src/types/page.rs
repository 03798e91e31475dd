//! One page of search results and the request that produced it.

use serde::{Deserialize, Serialize};

use super::ImageHit;

/// Parameters for a single page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Trimmed, non-empty query text
    pub query: String,
    /// 1-based page number
    pub page: u32,
    /// Fixed page size for the session
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(query: impl Into<String>, page: u32, per_page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            per_page,
        }
    }
}

/// A page of image results plus the total for the whole query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Number of matches the service will actually page through
    #[serde(rename = "totalHits", default)]
    pub total_hits: u64,
    /// Number of matches overall, including ones beyond the paging limit
    #[serde(default)]
    pub total: u64,
    /// Results for this page, in relevance order
    #[serde(default)]
    pub hits: Vec<ImageHit>,
}

impl PageResponse {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_page() {
        let page: PageResponse =
            serde_json::from_str(r#"{ "total": 0, "totalHits": 0, "hits": [] }"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_hits, 0);
    }

    #[test]
    fn test_total_hits_distinct_from_total() {
        let page: PageResponse =
            serde_json::from_str(r#"{ "total": 4692, "totalHits": 500, "hits": [] }"#).unwrap();
        assert_eq!(page.total, 4692);
        assert_eq!(page.total_hits, 500);
    }
}
