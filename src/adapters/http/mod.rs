//! Page Fetcher Adapters.
//!
//! ## Available Adapters
//!
//! - `ReqwestPageFetcher` - Fetches pages over HTTPS with deadline and retries
//! - `MockPageFetcher` - Canned pages for testing

mod mock_fetcher;
mod reqwest_fetcher;

pub use mock_fetcher::MockPageFetcher;
pub use reqwest_fetcher::{ReqwestFetcherConfig, ReqwestPageFetcher};
