//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PageFetcher` - Retrieves portal pages (deadline and retries included)

mod page_fetcher;

pub use page_fetcher::{FetchError, PageFetcher, PageRequest};
