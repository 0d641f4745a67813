//! LookupSupplementsHandler - Query handler for one airport's supplements.
//!
//! Resolves the cycle to search, fetches the results page for the airport
//! and stamps every document row with that cycle's effective dates.

use std::sync::Arc;

use crate::domain::supplement::{
    parse_results_page, Cycle, CycleLabel, LookupOptions, ResultsPage, SupplementListing,
};
use crate::ports::PageFetcher;

use super::cycle_resolver::CycleResolver;
use super::endpoint::SearchEndpoint;
use super::error::LookupError;

/// Query for one airport identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSupplementsQuery {
    /// ICAO code, passed to the portal as given.
    pub icao: String,
    pub options: LookupOptions,
}

impl LookupSupplementsQuery {
    pub fn new(icao: impl Into<String>, options: LookupOptions) -> Self {
        Self {
            icao: icao.into(),
            options,
        }
    }
}

/// Result of a successful lookup.
pub type LookupSupplementsResult = SupplementListing;

/// Handler for single-airport lookups.
#[derive(Clone)]
pub struct LookupSupplementsHandler {
    fetcher: Arc<dyn PageFetcher>,
    endpoint: SearchEndpoint,
    cycles: CycleResolver,
}

impl LookupSupplementsHandler {
    pub fn new(fetcher: Arc<dyn PageFetcher>, endpoint: SearchEndpoint) -> Self {
        let cycles = CycleResolver::new(fetcher.clone(), endpoint.clone());
        Self {
            fetcher,
            endpoint,
            cycles,
        }
    }

    /// The resolver this handler uses for cycle pages.
    pub fn cycles(&self) -> &CycleResolver {
        &self.cycles
    }

    pub async fn handle(
        &self,
        query: LookupSupplementsQuery,
    ) -> Result<LookupSupplementsResult, LookupError> {
        let icao = query.icao.as_str();
        let cycle = self.cycles.resolve_search_cycle(query.options).await?;
        let code = cycle.as_ref().and_then(Cycle::search_code);

        let request = self.endpoint.results_page(icao, code)?;
        let page = self.fetcher.fetch(&request).await?;

        match parse_results_page(&page)? {
            ResultsPage::NoResults => {
                tracing::warn!(icao, "No results found.");
                Ok(SupplementListing::NoResults)
            }
            ResultsPage::TableMissing => {
                tracing::error!(icao, url = %request.url, "Unable to parse the #resultsTable page element");
                Ok(SupplementListing::Unparseable {
                    reason: "results table missing from page".to_string(),
                })
            }
            ResultsPage::Rows(rows) if rows.is_empty() => {
                tracing::debug!(icao, "Results table has no document rows");
                Ok(SupplementListing::Documents { records: Vec::new() })
            }
            ResultsPage::Rows(rows) => {
                let label = cycle.as_ref().map(|c| c.label).unwrap_or_default();
                let dates = match cycle.as_ref() {
                    Some(cycle) => cycle.effective_dates()?,
                    None => None,
                }
                .ok_or(LookupError::EffectiveDatesUnavailable(label))?;

                tracing::debug!(icao, cycle = %label, rows = rows.len(), "Parsed supplement rows");
                let records = rows.into_iter().map(|row| row.stamp(dates)).collect();
                Ok(SupplementListing::Documents { records })
            }
        }
    }
}
