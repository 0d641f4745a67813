//! Chart supplement domain: cycles, effective dates and results tables.
//!
//! Everything here is pure. Pages arrive as HTML text and leave as typed
//! values; fetching them is the job of the [`PageFetcher`](crate::ports::PageFetcher)
//! port.

mod cycle;
mod effective_dates;
mod errors;
mod options;
mod record;
mod results_page;

pub use cycle::{parse_cycle_page, Cycle, CycleLabel, UnknownCycleLabel};
pub use effective_dates::{strip_control_whitespace, EffectiveDateRange};
pub use errors::{DateRangeError, TableShapeError};
pub use options::LookupOptions;
pub use record::{DocumentLink, SupplementListing, SupplementRecord, SupplementRow};
pub use results_page::{parse_results_page, ResultsColumn, ResultsPage, NO_RESULTS_MESSAGE};
