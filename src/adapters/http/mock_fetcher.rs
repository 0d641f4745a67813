//! Mock Page Fetcher for testing.
//!
//! Serves canned pages so lookups can be exercised without the portal.
//!
//! # Features
//!
//! - Pages keyed by exact URL or by a URL fragment
//! - Error injection for transport failures
//! - Simulated latency
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let fetcher = MockPageFetcher::new()
//!     .with_page(BASE_URL, CYCLE_PAGE_HTML)
//!     .with_page_containing("ident=PANC", RESULTS_HTML);
//!
//! let body = fetcher.fetch(&PageRequest::new(BASE_URL)).await?;
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{FetchError, PageFetcher, PageRequest};

#[derive(Debug, Clone)]
enum UrlMatch {
    Exact(String),
    Containing(String),
}

impl UrlMatch {
    fn matches(&self, url: &str) -> bool {
        match self {
            UrlMatch::Exact(expected) => url == expected,
            UrlMatch::Containing(fragment) => url.contains(fragment.as_str()),
        }
    }
}

#[derive(Debug, Clone)]
struct Route {
    url: UrlMatch,
    response: Result<String, FetchError>,
}

/// Mock page fetcher for testing.
///
/// Exact-URL routes are consulted before fragment routes; within each kind
/// the first registered route wins. Unmatched URLs answer HTTP 404.
#[derive(Debug, Clone, Default)]
pub struct MockPageFetcher {
    routes: Arc<Mutex<Vec<Route>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<PageRequest>>>,
}

impl MockPageFetcher {
    /// Creates a mock with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` for exactly `url`.
    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.push(UrlMatch::Exact(url.into()), Ok(body.into()))
    }

    /// Serves `body` for any URL containing `fragment`.
    pub fn with_page_containing(self, fragment: impl Into<String>, body: impl Into<String>) -> Self {
        self.push(UrlMatch::Containing(fragment.into()), Ok(body.into()))
    }

    /// Fails requests for exactly `url`.
    pub fn with_error(self, url: impl Into<String>, error: FetchError) -> Self {
        self.push(UrlMatch::Exact(url.into()), Err(error))
    }

    /// Fails requests for any URL containing `fragment`.
    pub fn with_error_containing(self, fragment: impl Into<String>, error: FetchError) -> Self {
        self.push(UrlMatch::Containing(fragment.into()), Err(error))
    }

    /// Adds simulated latency to every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// All requests received so far, in order.
    pub fn calls(&self) -> Vec<PageRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|request| request.url).collect()
    }

    /// Number of requests whose URL contains `fragment`.
    pub fn call_count_containing(&self, fragment: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.url.contains(fragment))
            .count()
    }

    fn push(self, url: UrlMatch, response: Result<String, FetchError>) -> Self {
        self.routes.lock().unwrap().push(Route { url, response });
        self
    }

    fn respond(&self, url: &str) -> Result<String, FetchError> {
        let routes = self.routes.lock().unwrap();
        let exact = routes
            .iter()
            .find(|route| matches!(route.url, UrlMatch::Exact(_)) && route.url.matches(url));
        let route = exact.or_else(|| routes.iter().find(|route| route.url.matches(url)));

        match route {
            Some(route) => route.response.clone(),
            None => Err(FetchError::HttpStatus {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, request: &PageRequest) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(request.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.respond(&request.url)
    }
}
