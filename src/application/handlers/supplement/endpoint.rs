//! Portal URLs.

use reqwest::Url;

use crate::config::ClientConfig;
use crate::ports::{FetchError, PageRequest};

/// The portal's search endpoint.
///
/// `GET <base>` serves the cycle selection page and
/// `GET <base>results/?cycle=<code>&ident=<ICAO>&navaid=` serves results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoint {
    base: Url,
    accept: String,
}

impl SearchEndpoint {
    /// Creates an endpoint for `base_url`, which should end with `/`.
    pub fn new(base_url: &str, accept: impl Into<String>) -> Result<Self, FetchError> {
        let base = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            base,
            accept: accept.into(),
        })
    }

    /// Creates an endpoint from client configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, FetchError> {
        Self::new(&config.base_url, config.accept.clone())
    }

    /// Request for the cycle selection page.
    pub fn cycle_page(&self) -> PageRequest {
        PageRequest::new(self.base.as_str()).with_accept(&self.accept)
    }

    /// Request for the results page of one identifier.
    ///
    /// The cycle parameter is sent empty when no code is known; the portal
    /// then searches its latest cycle.
    pub fn results_page(&self, icao: &str, cycle_code: Option<&str>) -> Result<PageRequest, FetchError> {
        let mut url = self
            .base
            .join("results/")
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("cycle", cycle_code.unwrap_or_default())
            .append_pair("ident", icao)
            .append_pair("navaid", "");

        Ok(PageRequest::new(url.as_str()).with_accept(&self.accept))
    }
}
