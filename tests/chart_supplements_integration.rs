//! Integration tests for chart supplement lookups.
//!
//! These tests drive the public `ChartSupplements` client end to end:
//! 1. Cycle selection page is read to resolve the cycle code and dates
//! 2. Results page is requested for each identifier
//! 3. Results table is parsed into records stamped with the cycle dates
//!
//! Uses the in-memory page fetcher so no network access is needed.

use chrono::{TimeZone, Utc};
use std::sync::Arc;

use chart_supplements::adapters::MockPageFetcher;
use chart_supplements::application::SearchEndpoint;
use chart_supplements::ports::FetchError;
use chart_supplements::{
    ChartSupplements, CycleLabel, ListResponse, LookupError, LookupOptions, SupplementListing,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const BASE: &str = "https://portal.example/dafd/search/";

const CYCLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <form action="results/" method="get">
    <label for="cycle">Cycle</label>
    <select id="cycle" name="cycle">
      <option value="2401" selected="selected">
		JAN 04 - JAN 31, 2024[2401]
		Current
      </option>
      <option value="2402">
		FEB 01 - FEB 28, 2024[2402]
		Next
      </option>
    </select>
  </form>
</body>
</html>"#;

const CURRENT_ONLY_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <select id="cycle" name="cycle">
    <option value="2401">JAN 04 - JAN 31, 2024[2401] Current</option>
  </select>
</body></html>"#;

const NO_RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <div class="message-box info">
    No results found.
  </div>
</body></html>"#;

fn results_page(ident: &str, city: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><body>
  <table id="resultsTable" class="striped">
    <thead>
      <tr>
        <th>Ident</th><th>City</th><th>State</th><th>Airport</th>
        <th>NavAid</th><th>Chart</th><th>Volume Back Pages</th><th>Airport/NavAid Listing</th>
      </tr>
    </thead>
    <tbody>
      <tr>
        <td>{ident}</td>
        <td>{city}</td>
        <td>AK</td>
        <td>{city} AIRPORT</td>
        <td></td>
        <td>AK</td>
        <td><a href="https://aeronav.example/afd/AK_rear_2401.pdf">Alaska Back Pages</a></td>
        <td><a href="https://aeronav.example/afd/AK_{ident}.pdf">{ident}</a></td>
      </tr>
      <tr class="spacer"><td colspan="8">&nbsp;</td></tr>
    </tbody>
  </table>
</body></html>"#
    )
}

fn client(fetcher: &MockPageFetcher) -> ChartSupplements {
    let endpoint = SearchEndpoint::new(BASE, "text/html").expect("valid endpoint");
    ChartSupplements::new(Arc::new(fetcher.clone()), endpoint)
}

fn portal() -> MockPageFetcher {
    MockPageFetcher::new()
        .with_page(BASE, CYCLE_PAGE)
        .with_page_containing("ident=PANC", results_page("PANC", "ANCHORAGE"))
        .with_page_containing("ident=PABV", results_page("PABV", "BIRCHWOOD"))
        .with_page_containing("ident=ZZZZ", NO_RESULTS_PAGE)
}

// =============================================================================
// Single identifier
// =============================================================================

#[tokio::test]
async fn single_icao_returns_one_record_with_current_dates() {
    let fetcher = portal();
    let listing = client(&fetcher)
        .lookup_one("PANC", LookupOptions::default())
        .await
        .unwrap();

    let records = listing.into_records().expect("documents");
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.ident, "PANC");
    assert_eq!(record.city, "ANCHORAGE");
    assert_eq!(record.airport, "ANCHORAGE AIRPORT");
    assert_eq!(record.vol_back_pages.name, "Alaska Back Pages");
    assert_eq!(
        record.airport_nav_aid_listing.url.as_deref(),
        Some("https://aeronav.example/afd/AK_PANC.pdf")
    );
    assert_eq!(
        record.effective_start_date,
        Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap()
    );
    assert_eq!(
        record.effective_end_date,
        Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap()
    );

    let current = client(&fetcher)
        .current_cycle_effective_dates()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.effective_start_date, current.start_date);
    assert_eq!(record.effective_end_date, current.end_date);
}

#[tokio::test]
async fn list_with_single_string_returns_single_listing() {
    let response = client(&portal())
        .list("PANC", LookupOptions::default())
        .await
        .unwrap();

    let listing = response.into_one().expect("single listing");
    assert_eq!(listing.records().unwrap().len(), 1);
}

#[tokio::test]
async fn no_results_is_distinct_from_empty_list() {
    let listing = client(&portal())
        .lookup_one("ZZZZ", LookupOptions::default())
        .await
        .unwrap();

    assert_eq!(listing, SupplementListing::NoResults);
    assert!(listing.records().is_none());
}

#[tokio::test]
async fn single_icao_transport_failure_is_an_error() {
    let fetcher = MockPageFetcher::new()
        .with_page(BASE, CYCLE_PAGE)
        .with_error_containing("ident=PANC", FetchError::Timeout { timeout_secs: 30 });

    let err = client(&fetcher)
        .list("PANC", LookupOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err, LookupError::Fetch(FetchError::Timeout { timeout_secs: 30 }));
}

// =============================================================================
// Cycle selection
// =============================================================================

#[tokio::test]
async fn next_cycle_query_uses_next_code() {
    let fetcher = portal();
    let listing = client(&fetcher)
        .lookup_one("PANC", LookupOptions::next_cycle())
        .await
        .unwrap();

    let records = listing.into_records().unwrap();
    assert_eq!(
        records[0].effective_start_date,
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        fetcher.call_count_containing("results/?cycle=2402&ident=PANC&navaid="),
        1
    );
}

#[tokio::test]
async fn unavailable_next_cycle_falls_back_to_current_code() {
    let fetcher = MockPageFetcher::new()
        .with_page(BASE, CURRENT_ONLY_PAGE)
        .with_page_containing("ident=PANC", results_page("PANC", "ANCHORAGE"));
    let client = client(&fetcher);

    assert_eq!(client.fetch_cycle(CycleLabel::Next).await.unwrap(), None);
    assert_eq!(client.fetch_next_cycle_code().await.unwrap(), None);

    let listing = client
        .lookup_one("PANC", LookupOptions::next_cycle())
        .await
        .unwrap();

    assert_eq!(listing.records().unwrap().len(), 1);
    assert_eq!(
        fetcher.call_count_containing("results/?cycle=2401&ident=PANC&navaid="),
        1
    );
    assert_eq!(fetcher.call_count_containing("cycle=2402"), 0);
}

#[tokio::test]
async fn cycle_queries_read_selector() {
    let client = client(&portal());

    let current = client.fetch_cycle(CycleLabel::Current).await.unwrap().unwrap();
    assert_eq!(current.code.as_deref(), Some("2401"));
    assert!(current.display_text.contains("JAN 04 - JAN 31, 2024[2401]"));

    assert_eq!(
        client.fetch_current_cycle_code().await.unwrap().as_deref(),
        Some("2401")
    );
    assert_eq!(
        client.fetch_next_cycle_code().await.unwrap().as_deref(),
        Some("2402")
    );

    let next = client
        .get_cycle_effective_dates(CycleLabel::Next)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(next.end_date, Utc.with_ymd_and_hms(2024, 2, 28, 0, 0, 0).unwrap());
}

// =============================================================================
// Batches
// =============================================================================

#[tokio::test]
async fn batch_preserves_order_and_isolates_outcomes() {
    let fetcher = portal()
        .with_error_containing("ident=PADK", FetchError::network("connection reset"));

    let response = client(&fetcher)
        .list(["PANC", "ZZZZ", "PADK", "PABV"], LookupOptions::default())
        .await
        .unwrap();

    let outcomes = match response {
        ListResponse::Many(outcomes) => outcomes,
        other => panic!("expected batch response, got {:?}", other),
    };
    assert_eq!(outcomes.len(), 4);

    assert_eq!(outcomes[0].as_ref().unwrap().records().unwrap()[0].ident, "PANC");
    assert_eq!(outcomes[1], Ok(SupplementListing::NoResults));
    assert_eq!(
        outcomes[2],
        Err(LookupError::Fetch(FetchError::network("connection reset")))
    );
    assert_eq!(outcomes[3].as_ref().unwrap().records().unwrap()[0].ident, "PABV");
}

#[tokio::test]
async fn batch_of_two_with_one_null_keeps_both_positions() {
    let response = client(&portal())
        .list(vec!["ZZZZ".to_string(), "PANC".to_string()], LookupOptions::default())
        .await
        .unwrap();

    let outcomes = response.into_many().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].as_ref().unwrap().is_no_results());
    assert!(outcomes[1].as_ref().unwrap().records().is_some());
}

#[tokio::test]
async fn batch_response_serializes_like_listing_array() {
    let response = client(&portal())
        .list(["PANC", "ZZZZ"], LookupOptions::default())
        .await
        .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    let first = &json[0]["records"][0];
    assert_eq!(first["ident"], "PANC");
    assert_eq!(first["navAid"], "");
    assert_eq!(first["volBackPages"]["name"], "Alaska Back Pages");
    assert_eq!(first["effectiveStartDate"], "2024-01-04T00:00:00Z");
    assert_eq!(first["effectiveEndDate"], "2024-01-31T00:00:00Z");
    assert_eq!(json[1]["status"], "noResults");
}
