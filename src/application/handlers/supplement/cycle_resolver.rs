//! CycleResolver - Reads the cycle selection page.
//!
//! A cycle that is not offered on the page is an expected state (the Next
//! cycle only appears shortly before the current one ends), so it resolves to
//! `None` with a warning. Transport failures and unreadable date text are
//! returned as errors.

use std::sync::Arc;

use crate::domain::supplement::{parse_cycle_page, Cycle, CycleLabel, EffectiveDateRange, LookupOptions};
use crate::ports::PageFetcher;

use super::endpoint::SearchEndpoint;
use super::error::LookupError;

/// Resolves publication cycles from the portal.
#[derive(Clone)]
pub struct CycleResolver {
    fetcher: Arc<dyn PageFetcher>,
    endpoint: SearchEndpoint,
}

impl CycleResolver {
    pub fn new(fetcher: Arc<dyn PageFetcher>, endpoint: SearchEndpoint) -> Self {
        Self { fetcher, endpoint }
    }

    /// Fetches the selection page and returns the option for `label`.
    pub async fn fetch_cycle(&self, label: CycleLabel) -> Result<Option<Cycle>, LookupError> {
        let page = self.fetcher.fetch(&self.endpoint.cycle_page()).await?;
        let cycle = parse_cycle_page(&page, label);
        tracing::debug!(cycle = %label, found = cycle.is_some(), "Read cycle selection page");
        Ok(cycle)
    }

    /// Returns the code for `label`, or `None` with a warning when the cycle
    /// is not published.
    pub async fn fetch_cycle_code(&self, label: CycleLabel) -> Result<Option<String>, LookupError> {
        let cycle = self.fetch_cycle(label).await?;
        let code = cycle
            .as_ref()
            .and_then(Cycle::search_code)
            .map(str::to_string);

        if code.is_none() {
            warn_unavailable(label);
        }
        Ok(code)
    }

    /// Code of the Current cycle, e.g. `"2401"`.
    pub async fn fetch_current_cycle_code(&self) -> Result<Option<String>, LookupError> {
        self.fetch_cycle_code(CycleLabel::Current).await
    }

    /// Code of the Next cycle, if it is published yet.
    pub async fn fetch_next_cycle_code(&self) -> Result<Option<String>, LookupError> {
        self.fetch_cycle_code(CycleLabel::Next).await
    }

    /// Effective dates of `label`, or `None` when the cycle has no text.
    pub async fn get_cycle_effective_dates(
        &self,
        label: CycleLabel,
    ) -> Result<Option<EffectiveDateRange>, LookupError> {
        match self.fetch_cycle(label).await? {
            Some(cycle) => Ok(cycle.effective_dates()?),
            None => Ok(None),
        }
    }

    /// Effective dates of the Current cycle, with a warning when they cannot
    /// be retrieved.
    pub async fn current_cycle_effective_dates(&self) -> Result<Option<EffectiveDateRange>, LookupError> {
        let dates = self.get_cycle_effective_dates(CycleLabel::Current).await?;
        if dates.is_none() {
            tracing::warn!("Could not retrieve current cycle effective dates");
        }
        Ok(dates)
    }

    /// Picks the cycle a lookup should query.
    ///
    /// With `get_next_cycle` set, the Next cycle is used if it has a code;
    /// otherwise this falls back to the Current cycle. The Current cycle is
    /// returned even without a code so its dates remain usable.
    pub async fn resolve_search_cycle(&self, options: LookupOptions) -> Result<Option<Cycle>, LookupError> {
        if options.get_next_cycle {
            if let Some(next) = self.fetch_cycle(CycleLabel::Next).await? {
                if next.search_code().is_some() {
                    return Ok(Some(next));
                }
            }
            warn_unavailable(CycleLabel::Next);
            tracing::warn!("Next cycle not available. Retrieving current cycle instead.");
        }

        let current = self.fetch_cycle(CycleLabel::Current).await?;
        if current.as_ref().and_then(Cycle::search_code).is_none() {
            warn_unavailable(CycleLabel::Current);
        }
        Ok(current)
    }
}

fn warn_unavailable(label: CycleLabel) {
    match label {
        CycleLabel::Current => tracing::warn!("Current cycle not found or not available."),
        CycleLabel::Next => tracing::warn!(
            "Next cycle not found or not available. The Next cycle is available 19 days before the end of the current cycle."
        ),
    }
}
