//! HTTP client for the image search service.
//!
//! One GET per page, no retries, no caching: asking for the same page twice
//! hits the network twice.

use reqwest::Client;

use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::types::{PageRequest, PageResponse};

/// Anything that can produce a page of image results.
///
/// The controller is generic over this so it can run against an in-memory
/// source in tests.
#[allow(async_fn_in_trait)]
pub trait ImageSource {
    /// Fetch one page for `request.query`.
    async fn fetch_page(&self, request: &PageRequest) -> SearchResult<PageResponse>;
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    async fn fetch_page(&self, request: &PageRequest) -> SearchResult<PageResponse> {
        (**self).fetch_page(request).await
    }
}

/// Pixabay REST client
#[derive(Debug, Clone)]
pub struct PixabayClient {
    http: Client,
    config: SearchConfig,
}

impl PixabayClient {
    /// Build a client after validating `config`.
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        config.validate()?;
        let http = Client::builder()
            .user_agent(concat!("pixseek/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn safesearch(&self) -> &'static str {
        if self.config.safesearch {
            "true"
        } else {
            "false"
        }
    }
}

impl ImageSource for PixabayClient {
    async fn fetch_page(&self, request: &PageRequest) -> SearchResult<PageResponse> {
        // The key goes in the query string; never log the full URL.
        tracing::debug!(
            endpoint = %self.config.endpoint,
            query = %request.query,
            page = request.page,
            per_page = request.per_page,
            "requesting image page"
        );

        let res = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", request.query.as_str()),
                ("image_type", self.config.image_type.as_str()),
                ("orientation", self.config.orientation.as_str()),
                ("safesearch", self.safesearch()),
            ])
            .query(&[("per_page", request.per_page), ("page", request.page)])
            .send()
            .await
            .map_err(network)?;

        let status = res.status();
        let body = res.text().await.map_err(network)?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "image service returned an error");
            return Err(SearchError::Status {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }

        let page: PageResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            hits = page.hits.len(),
            total_hits = page.total_hits,
            "image page received"
        );
        Ok(page)
    }
}

/// reqwest errors print the request URL, which carries the API key.
fn network(err: reqwest::Error) -> SearchError {
    SearchError::Network(err.without_url())
}
