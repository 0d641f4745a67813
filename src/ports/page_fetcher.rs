//! Page Fetcher Port - Interface for retrieving portal pages over HTTP.
//!
//! The lookup logic only needs "give me the body of this URL". Deadlines,
//! retries and headers are the adapter's business; callers observe either the
//! page text or a [`FetchError`] once the retry budget is spent.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct StaticFetcher(String);
//!
//! #[async_trait]
//! impl PageFetcher for StaticFetcher {
//!     async fn fetch(&self, _request: &PageRequest) -> Result<String, FetchError> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

/// Port for fetching HTML pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the page and returns its body text.
    async fn fetch(&self, request: &PageRequest) -> Result<String, FetchError>;
}

/// A page to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Absolute URL including query string.
    pub url: String,
    /// Value for the `Accept` header, if any.
    pub accept: Option<String>,
}

impl PageRequest {
    /// Creates a request for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            accept: None,
        }
    }

    /// Sets the `Accept` header.
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }
}

/// Errors from fetching a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request did not complete within its deadline.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured deadline.
        timeout_secs: u64,
    },

    /// Connection or transfer failure.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The URL could not be built or parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        FetchError::Network(message.into())
    }

    /// Returns true if trying again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Timeout { .. } | FetchError::Network(_) => true,
            FetchError::HttpStatus { status, .. } => *status == 429 || (500..=599).contains(status),
            FetchError::InvalidUrl(_) => false,
        }
    }
}
