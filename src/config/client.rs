//! Portal client configuration

use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Default search endpoint of the chart supplement portal.
pub const DEFAULT_BASE_URL: &str =
    "https://www.faa.gov/air_traffic/flight_info/aeronav/digital_products/dafd/search/";

/// HTTP settings for talking to the supplement portal
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Search endpoint; results live under `results/`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `Accept` header sent with every request. The portal answers very
    /// slowly without it.
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Per-request deadline in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries after the first attempt
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Optional `User-Agent` header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate client configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        Url::parse(&self.base_url)
            .map_err(|e| ValidationError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;
        if !self.base_url.ends_with('/') {
            return Err(ValidationError::BaseUrlMissingTrailingSlash);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_retries > 10 {
            return Err(ValidationError::TooManyRetries);
        }
        if self.accept.trim().is_empty() {
            return Err(ValidationError::EmptyAccept);
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            accept: default_accept(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_accept() -> String {
    "text/html".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    3
}
