//! ChartSupplements - Public entry point for supplement lookups.
//!
//! Wires the page fetcher, endpoint and handlers together and exposes the
//! callable surface: listing by one or many identifiers plus the cycle
//! queries.
//!
//! # Example
//!
//! ```no_run
//! use chart_supplements::{ChartSupplements, LookupOptions};
//! use chart_supplements::config::AppConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ChartSupplements::from_config(&AppConfig::default())?;
//! let listings = client.list(["PANC", "PADK"], LookupOptions::default()).await?;
//! println!("{}", serde_json::to_string_pretty(&listings)?);
//! # Ok(())
//! # }
//! ```

use serde::{Serialize, Serializer};
use std::sync::Arc;

use crate::adapters::{ReqwestFetcherConfig, ReqwestPageFetcher};
use crate::config::{AppConfig, ClientConfig};
use crate::domain::supplement::{Cycle, CycleLabel, EffectiveDateRange, LookupOptions, SupplementListing};
use crate::ports::PageFetcher;

use super::handlers::{
    BatchLookupHandler, BatchLookupQuery, CycleResolver, LookupError, LookupSupplementsHandler,
    LookupSupplementsQuery, SearchEndpoint,
};

/// One identifier or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IcaoQuery {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for IcaoQuery {
    fn from(icao: &str) -> Self {
        IcaoQuery::One(icao.to_string())
    }
}

impl From<String> for IcaoQuery {
    fn from(icao: String) -> Self {
        IcaoQuery::One(icao)
    }
}

impl From<Vec<String>> for IcaoQuery {
    fn from(icaos: Vec<String>) -> Self {
        IcaoQuery::Many(icaos)
    }
}

impl From<Vec<&str>> for IcaoQuery {
    fn from(icaos: Vec<&str>) -> Self {
        IcaoQuery::Many(icaos.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for IcaoQuery {
    fn from(icaos: &[&str]) -> Self {
        IcaoQuery::Many(icaos.iter().map(|icao| icao.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for IcaoQuery {
    fn from(icaos: [&str; N]) -> Self {
        IcaoQuery::Many(icaos.iter().map(|icao| icao.to_string()).collect())
    }
}

/// Response shaped like the query: one listing, or one outcome per identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListResponse {
    One(SupplementListing),
    Many(Vec<Result<SupplementListing, LookupError>>),
}

impl ListResponse {
    /// The single listing, if this answers a single identifier.
    pub fn into_one(self) -> Option<SupplementListing> {
        match self {
            ListResponse::One(listing) => Some(listing),
            ListResponse::Many(_) => None,
        }
    }

    /// The per-identifier outcomes, if this answers a list.
    pub fn into_many(self) -> Option<Vec<Result<SupplementListing, LookupError>>> {
        match self {
            ListResponse::One(_) => None,
            ListResponse::Many(outcomes) => Some(outcomes),
        }
    }
}

/// Failed batch entries serialize as `{"error": "<message>"}`.
impl Serialize for ListResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(untagged)]
        enum Entry<'a> {
            Listing(&'a SupplementListing),
            Error { error: String },
        }

        match self {
            ListResponse::One(listing) => listing.serialize(serializer),
            ListResponse::Many(outcomes) => serializer.collect_seq(outcomes.iter().map(|outcome| {
                match outcome {
                    Ok(listing) => Entry::Listing(listing),
                    Err(err) => Entry::Error {
                        error: err.to_string(),
                    },
                }
            })),
        }
    }
}

/// Chart supplement client.
#[derive(Clone)]
pub struct ChartSupplements {
    lookup: LookupSupplementsHandler,
    batch: BatchLookupHandler,
}

impl ChartSupplements {
    /// Creates a client over any page fetcher.
    pub fn new(fetcher: Arc<dyn PageFetcher>, endpoint: SearchEndpoint) -> Self {
        let lookup = LookupSupplementsHandler::new(fetcher, endpoint);
        let batch = BatchLookupHandler::new(lookup.clone());
        Self { lookup, batch }
    }

    /// Creates a client that talks to the configured portal over HTTPS.
    pub fn from_config(config: &AppConfig) -> Result<Self, LookupError> {
        Self::from_client_config(&config.client)
    }

    /// Creates a client from the portal client section alone.
    pub fn from_client_config(config: &ClientConfig) -> Result<Self, LookupError> {
        let endpoint = SearchEndpoint::from_config(config)?;
        let fetcher = ReqwestPageFetcher::new(ReqwestFetcherConfig::from(config));
        Ok(Self::new(Arc::new(fetcher), endpoint))
    }

    fn cycles(&self) -> &CycleResolver {
        self.lookup.cycles()
    }

    /// Lists supplements for one identifier or many.
    ///
    /// A single identifier's failure is returned as the error. For a list,
    /// every identifier gets its own outcome and failures stay in their slot.
    pub async fn list(
        &self,
        icaos: impl Into<IcaoQuery>,
        options: LookupOptions,
    ) -> Result<ListResponse, LookupError> {
        match icaos.into() {
            IcaoQuery::One(icao) => self.lookup_one(icao, options).await.map(ListResponse::One),
            IcaoQuery::Many(icaos) => Ok(ListResponse::Many(
                self.batch.handle(BatchLookupQuery::new(icaos, options)).await,
            )),
        }
    }

    /// Lists supplements for one identifier.
    pub async fn lookup_one(
        &self,
        icao: impl Into<String>,
        options: LookupOptions,
    ) -> Result<SupplementListing, LookupError> {
        self.lookup
            .handle(LookupSupplementsQuery::new(icao, options))
            .await
    }

    /// The selector option for `label`, or `None` if it is not published.
    pub async fn fetch_cycle(&self, label: CycleLabel) -> Result<Option<Cycle>, LookupError> {
        self.cycles().fetch_cycle(label).await
    }

    pub async fn fetch_current_cycle_code(&self) -> Result<Option<String>, LookupError> {
        self.cycles().fetch_current_cycle_code().await
    }

    pub async fn fetch_next_cycle_code(&self) -> Result<Option<String>, LookupError> {
        self.cycles().fetch_next_cycle_code().await
    }

    pub async fn get_cycle_effective_dates(
        &self,
        label: CycleLabel,
    ) -> Result<Option<EffectiveDateRange>, LookupError> {
        self.cycles().get_cycle_effective_dates(label).await
    }

    pub async fn current_cycle_effective_dates(&self) -> Result<Option<EffectiveDateRange>, LookupError> {
        self.cycles().current_cycle_effective_dates().await
    }
}
