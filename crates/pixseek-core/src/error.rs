//! Error types for pixseek

use thiserror::Error;

/// Main error type for pixseek operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request never produced a response (DNS, connect, TLS, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The image service answered with a non-success status
    #[error("Request failed with status code {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Body text returned by the service, trimmed
        message: String,
    },

    /// The response body was not the JSON shape we expect
    #[error("Could not decode image service response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration rejected before any request was made
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required DOM element is not mounted
    #[error("Element not found: {0}")]
    MissingElement(&'static str),
}

impl SearchError {
    /// Text suitable for an error toast.
    ///
    /// Returns `None` when the error carries nothing worth showing, so the
    /// caller can fall back to its own generic message.
    pub fn user_message(&self) -> Option<String> {
        let message = match self {
            SearchError::Status { status, message } if message.trim().is_empty() => {
                format!("Request failed with status code {}", status)
            }
            SearchError::Status { message, .. } => message.clone(),
            SearchError::Network(err) if err.is_timeout() => "Request timed out".to_string(),
            SearchError::Network(err) if err.is_connect() => "Network Error".to_string(),
            // Other transport and decode errors read like library internals.
            SearchError::Network(_) | SearchError::Decode(_) => String::new(),
            other => other.to_string(),
        };

        let trimmed = message.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Result type alias using SearchError
pub type SearchResult<T> = Result<T, SearchError>;
