//! Application handlers.
//!
//! Query handlers that orchestrate domain parsing and the page fetcher port.

pub mod supplement;

pub use supplement::{
    BatchLookupHandler, BatchLookupQuery, BatchLookupResult, CycleResolver, LookupError,
    LookupSupplementsHandler, LookupSupplementsQuery, LookupSupplementsResult, SearchEndpoint,
};
