//! Reqwest Page Fetcher - Implementation of PageFetcher over HTTPS.
//!
//! Every attempt carries its own deadline. Transient failures (timeouts,
//! connection errors, 429 and 5xx) are retried with exponential backoff until
//! the retry budget is spent; anything else is returned immediately.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ReqwestFetcherConfig::new()
//!     .with_timeout(Duration::from_secs(30))
//!     .with_max_retries(3);
//!
//! let fetcher = ReqwestPageFetcher::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use std::time::Duration;
use tokio::time::sleep;

use crate::config::ClientConfig;
use crate::ports::{FetchError, PageFetcher, PageRequest};

/// Configuration for the reqwest fetcher.
#[derive(Debug, Clone)]
pub struct ReqwestFetcherConfig {
    /// Deadline for each attempt.
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub initial_backoff: Duration,
    /// Optional `User-Agent` header.
    pub user_agent: Option<String>,
}

impl ReqwestFetcherConfig {
    /// Creates a configuration with a 30 second deadline and 3 retries.
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_secs(1),
            user_agent: None,
        }
    }

    /// Sets the per-attempt deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the first backoff delay.
    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    /// Sets the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Delay before retry number `retry` (zero-based).
    fn backoff(&self, retry: u32) -> Duration {
        self.initial_backoff.saturating_mul(1u32 << retry.min(16))
    }
}

impl Default for ReqwestFetcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&ClientConfig> for ReqwestFetcherConfig {
    fn from(config: &ClientConfig) -> Self {
        let fetcher = Self::new()
            .with_timeout(config.timeout())
            .with_max_retries(config.max_retries);
        match config.user_agent {
            Some(ref user_agent) => fetcher.with_user_agent(user_agent.as_str()),
            None => fetcher,
        }
    }
}

/// Page fetcher backed by a shared reqwest client.
pub struct ReqwestPageFetcher {
    config: ReqwestFetcherConfig,
    client: Client,
}

impl ReqwestPageFetcher {
    /// Creates a fetcher with the given configuration.
    pub fn new(config: ReqwestFetcherConfig) -> Self {
        let mut builder = Client::builder().timeout(config.timeout);
        if let Some(ref user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Sends one attempt.
    async fn send(&self, request: &PageRequest) -> Result<Response, FetchError> {
        let mut builder = self.client.get(&request.url);
        if let Some(ref accept) = request.accept {
            builder = builder.header(header::ACCEPT, accept);
        }

        builder.send().await.map_err(|e| self.map_transport_error(e))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else if e.is_connect() {
            FetchError::network(format!("Connection failed: {}", e))
        } else {
            FetchError::network(e.to_string())
        }
    }

    /// Sends one attempt and reads the body of a successful response.
    async fn attempt(&self, request: &PageRequest) -> Result<String, FetchError> {
        let response = self.send(request).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: request.url.clone(),
            });
        }

        response.text().await.map_err(|e| self.map_transport_error(e))
    }
}

#[async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch(&self, request: &PageRequest) -> Result<String, FetchError> {
        let mut retry_count = 0;

        loop {
            tracing::debug!(url = %request.url, attempt = retry_count + 1, "Fetching page");

            match self.attempt(request).await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    tracing::warn!(
                        url = %request.url,
                        attempt = retry_count + 1,
                        "Fetch failed, retrying: {}",
                        err
                    );
                }
            }

            sleep(self.config.backoff(retry_count)).await;
            retry_count += 1;
        }
    }
}
