//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain parsing and coordinates the page fetcher
//! port. `ChartSupplements` is the public entry point on top of the handlers.

mod chart_supplements;
pub mod handlers;

pub use chart_supplements::{ChartSupplements, IcaoQuery, ListResponse};
pub use handlers::{
    BatchLookupHandler, BatchLookupQuery, BatchLookupResult, CycleResolver, LookupError,
    LookupSupplementsHandler, LookupSupplementsQuery, LookupSupplementsResult, SearchEndpoint,
};
