//! Search configuration: where to ask, with which key, how many per page.

use crate::error::{SearchError, SearchResult};

/// Default Pixabay REST endpoint
pub const DEFAULT_ENDPOINT: &str = "https://pixabay.com/api/";

/// Images per page unless configured otherwise
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Smallest page size the service accepts
pub const MIN_PER_PAGE: u32 = 3;

/// Largest page size the service accepts
pub const MAX_PER_PAGE: u32 = 200;

/// Settings shared by the API client and the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Base URL of the image search endpoint
    pub endpoint: String,
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Fixed page size
    pub per_page: u32,
    /// `image_type` filter
    pub image_type: String,
    /// `orientation` filter
    pub orientation: String,
    /// `safesearch` flag
    pub safesearch: bool,
}

impl SearchConfig {
    /// Config with the default endpoint and filters for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            per_page: DEFAULT_PER_PAGE,
            image_type: "photo".to_string(),
            orientation: "horizontal".to_string(),
            safesearch: true,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Reject values the service would refuse anyway.
    pub fn validate(&self) -> SearchResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(SearchError::InvalidConfig("API key is empty".to_string()));
        }

        let endpoint = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            SearchError::InvalidConfig(format!("endpoint '{}': {}", self.endpoint, e))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SearchError::InvalidConfig(format!(
                "endpoint '{}' must be http or https",
                self.endpoint
            )));
        }

        if !(MIN_PER_PAGE..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(SearchError::InvalidConfig(format!(
                "per_page must be between {} and {}, got {}",
                MIN_PER_PAGE, MAX_PER_PAGE, self.per_page
            )));
        }

        Ok(())
    }
}
