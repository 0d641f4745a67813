//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Page fetchers (reqwest, in-memory mock)

pub mod http;

pub use http::{MockPageFetcher, ReqwestFetcherConfig, ReqwestPageFetcher};
