//! BatchLookupHandler - Looks up many airports concurrently.
//!
//! Each identifier runs as its own task in a `JoinSet`. The batch waits for
//! every task; a failing or panicking task only fills its own slot with an
//! error. Results come back in input order.

use tokio::task::JoinSet;

use crate::domain::supplement::{LookupOptions, SupplementListing};

use super::error::LookupError;
use super::lookup_supplements::{LookupSupplementsHandler, LookupSupplementsQuery};

/// Query for several airport identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLookupQuery {
    pub icaos: Vec<String>,
    pub options: LookupOptions,
}

impl BatchLookupQuery {
    pub fn new<I, S>(icaos: I, options: LookupOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            icaos: icaos.into_iter().map(Into::into).collect(),
            options,
        }
    }
}

/// One outcome per input identifier, in input order.
pub type BatchLookupResult = Vec<Result<SupplementListing, LookupError>>;

/// Handler that fans a batch out to [`LookupSupplementsHandler`].
#[derive(Clone)]
pub struct BatchLookupHandler {
    lookup: LookupSupplementsHandler,
}

impl BatchLookupHandler {
    pub fn new(lookup: LookupSupplementsHandler) -> Self {
        Self { lookup }
    }

    pub async fn handle(&self, query: BatchLookupQuery) -> BatchLookupResult {
        let BatchLookupQuery { icaos, options } = query;

        let mut tasks = JoinSet::new();
        for (index, icao) in icaos.iter().cloned().enumerate() {
            let lookup = self.lookup.clone();
            tasks.spawn(async move {
                let outcome = lookup
                    .handle(LookupSupplementsQuery::new(icao, options))
                    .await;
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<Result<SupplementListing, LookupError>>> =
            icaos.iter().map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    if let Err(ref err) = outcome {
                        tracing::warn!(icao = %icaos[index], "Lookup failed: {}", err);
                    }
                    slots[index] = Some(outcome);
                }
                Err(join_error) => tracing::error!("Lookup task ended abnormally: {}", join_error),
            }
        }

        slots
            .into_iter()
            .zip(icaos)
            .map(|(slot, icao)| {
                slot.unwrap_or_else(|| {
                    Err(LookupError::TaskFailed {
                        icao,
                        reason: "task ended without a result".to_string(),
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockPageFetcher;
    use crate::application::handlers::supplement::SearchEndpoint;
    use crate::ports::{FetchError, PageFetcher, PageRequest};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    // ─────────────────────────────────────────────────────────────────────
    // Test Helpers
    // ─────────────────────────────────────────────────────────────────────

    const BASE: &str = "https://portal.example/dafd/search/";

    const CYCLES: &str = r#"
        <select id="cycle"><option value="2401">JAN 04 - JAN 31, 2024[2401] Current</option></select>
    "#;

    fn results(ident: &str) -> String {
        format!(
            r#"<table id="resultsTable"><tr>
                 <td>{ident}</td><td>CITY</td><td>AK</td><td>AIRPORT</td><td></td><td>AK</td>
                 <td><a href="/back.pdf">Back Pages</a></td><td><a href="/{ident}.pdf">{ident}</a></td>
               </tr></table>"#
        )
    }

    fn batch(fetcher: impl PageFetcher + 'static) -> BatchLookupHandler {
        let endpoint = SearchEndpoint::new(BASE, "text/html").unwrap();
        BatchLookupHandler::new(LookupSupplementsHandler::new(Arc::new(fetcher), endpoint))
    }

    /// Fetcher that panics for one identifier.
    struct PanickingFetcher {
        inner: MockPageFetcher,
        poison: &'static str,
    }

    #[async_trait]
    impl PageFetcher for PanickingFetcher {
        async fn fetch(&self, request: &PageRequest) -> Result<String, FetchError> {
            if request.url.contains(self.poison) {
                panic!("simulated fetcher panic");
            }
            self.inner.fetch(request).await
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn preserves_input_order() {
        let fetcher = MockPageFetcher::new()
            .with_page(BASE, CYCLES)
            .with_page_containing("ident=PANC", results("PANC"))
            .with_page_containing("ident=PABV", results("PABV"))
            .with_page_containing("ident=PADK", results("PADK"))
            .with_delay(Duration::from_millis(5));

        let outcomes = batch(fetcher)
            .handle(BatchLookupQuery::new(["PANC", "PABV", "PADK"], LookupOptions::default()))
            .await;

        let idents: Vec<String> = outcomes
            .into_iter()
            .map(|outcome| outcome.unwrap().into_records().unwrap()[0].ident.clone())
            .collect();
        assert_eq!(idents, vec!["PANC", "PABV", "PADK"]);
    }

    #[tokio::test]
    async fn one_no_result_does_not_affect_siblings() {
        let fetcher = MockPageFetcher::new()
            .with_page(BASE, CYCLES)
            .with_page_containing("ident=PANC", results("PANC"))
            .with_page_containing(
                "ident=ZZZZ",
                r#"<div class="message-box info">No results found.</div>"#,
            );

        let outcomes = batch(fetcher)
            .handle(BatchLookupQuery::new(["ZZZZ", "PANC"], LookupOptions::default()))
            .await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0], Ok(SupplementListing::NoResults));
        assert_eq!(outcomes[1].as_ref().unwrap().records().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_is_isolated() {
        let fetcher = MockPageFetcher::new()
            .with_page(BASE, CYCLES)
            .with_page_containing("ident=PANC", results("PANC"))
            .with_error_containing("ident=PADK", FetchError::Timeout { timeout_secs: 30 });

        let outcomes = batch(fetcher)
            .handle(BatchLookupQuery::new(["PANC", "PADK"], LookupOptions::default()))
            .await;

        assert!(outcomes[0].is_ok());
        assert_eq!(
            outcomes[1],
            Err(LookupError::Fetch(FetchError::Timeout { timeout_secs: 30 }))
        );
    }

    #[tokio::test]
    async fn panicking_task_is_isolated() {
        let inner = MockPageFetcher::new()
            .with_page(BASE, CYCLES)
            .with_page_containing("ident=PANC", results("PANC"));
        let fetcher = PanickingFetcher {
            inner,
            poison: "ident=BOOM",
        };

        let outcomes = batch(fetcher)
            .handle(BatchLookupQuery::new(["BOOM", "PANC"], LookupOptions::default()))
            .await;

        assert!(matches!(
            outcomes[0],
            Err(LookupError::TaskFailed { ref icao, .. }) if icao == "BOOM"
        ));
        assert!(outcomes[1].is_ok());
    }

    #[tokio::test]
    async fn empty_batch_is_empty() {
        let outcomes = batch(MockPageFetcher::new())
            .handle(BatchLookupQuery::new(Vec::<String>::new(), LookupOptions::default()))
            .await;
        assert!(outcomes.is_empty());
    }
}
