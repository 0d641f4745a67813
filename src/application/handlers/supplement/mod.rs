//! Chart supplement handlers.
//!
//! - `CycleResolver` - Current/Next cycle codes and effective dates
//! - `LookupSupplementsHandler` - Supplements for one airport
//! - `BatchLookupHandler` - Supplements for many airports, concurrently

mod batch_lookup;
mod cycle_resolver;
mod endpoint;
mod error;
mod lookup_supplements;

pub use batch_lookup::{BatchLookupHandler, BatchLookupQuery, BatchLookupResult};
pub use cycle_resolver::CycleResolver;
pub use endpoint::SearchEndpoint;
pub use error::LookupError;
pub use lookup_supplements::{
    LookupSupplementsHandler, LookupSupplementsQuery, LookupSupplementsResult,
};
