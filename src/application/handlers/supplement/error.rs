//! Lookup error taxonomy.

use thiserror::Error;

use crate::domain::supplement::{CycleLabel, DateRangeError, TableShapeError};
use crate::ports::FetchError;

/// Failures a caller must handle.
///
/// Expected outcomes (cycle not published, no results for an identifier,
/// results table missing) are not errors; see
/// [`SupplementListing`](crate::domain::supplement::SupplementListing).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The portal could not be reached within the retry budget.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Cycle option text changed shape.
    #[error("cycle dates unreadable: {0}")]
    DateRange(#[from] DateRangeError),

    /// Results table columns changed shape.
    #[error("results table changed shape: {0}")]
    TableShape(#[from] TableShapeError),

    /// The results table had documents but the cycle's dates could not be read.
    #[error("effective dates for the {0} cycle are unavailable")]
    EffectiveDatesUnavailable(CycleLabel),

    /// A batch task ended without producing a result.
    #[error("lookup task for {icao} failed: {reason}")]
    TaskFailed { icao: String, reason: String },
}
