//! Supplement records and lookup outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::effective_dates::EffectiveDateRange;

/// A named document with its hyperlink, as listed in a results cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub name: String,
    /// The cell's `href`, verbatim. `None` when the cell has no link.
    pub url: Option<String>,
}

/// One data row of the results table, before effective dates are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementRow {
    pub ident: String,
    pub city: String,
    pub state: String,
    pub airport: String,
    pub nav_aid: String,
    pub chart: String,
    pub vol_back_pages: DocumentLink,
    pub airport_nav_aid_listing: DocumentLink,
}

impl SupplementRow {
    /// Completes the row with the effective dates of the cycle it was read from.
    pub fn stamp(self, dates: EffectiveDateRange) -> SupplementRecord {
        SupplementRecord {
            ident: self.ident,
            city: self.city,
            state: self.state,
            airport: self.airport,
            nav_aid: self.nav_aid,
            chart: self.chart,
            vol_back_pages: self.vol_back_pages,
            airport_nav_aid_listing: self.airport_nav_aid_listing,
            effective_start_date: dates.start_date,
            effective_end_date: dates.end_date,
        }
    }
}

/// A chart supplement document listing for one airport in one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementRecord {
    pub ident: String,
    pub city: String,
    pub state: String,
    pub airport: String,
    pub nav_aid: String,
    pub chart: String,
    pub vol_back_pages: DocumentLink,
    pub airport_nav_aid_listing: DocumentLink,
    pub effective_start_date: DateTime<Utc>,
    pub effective_end_date: DateTime<Utc>,
}

/// Outcome of looking up one airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SupplementListing {
    /// The results table, possibly with no data rows.
    Documents { records: Vec<SupplementRecord> },
    /// The portal reported that it has nothing for this identifier.
    NoResults,
    /// The page did not contain a results table at all.
    Unparseable { reason: String },
}

impl SupplementListing {
    /// Returns the records, if the lookup produced a results table.
    pub fn records(&self) -> Option<&[SupplementRecord]> {
        match self {
            SupplementListing::Documents { records } => Some(records),
            _ => None,
        }
    }

    /// Consumes the listing and returns its records, if any.
    pub fn into_records(self) -> Option<Vec<SupplementRecord>> {
        match self {
            SupplementListing::Documents { records } => Some(records),
            _ => None,
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, SupplementListing::NoResults)
    }

    pub fn is_unparseable(&self) -> bool {
        matches!(self, SupplementListing::Unparseable { .. })
    }
}
