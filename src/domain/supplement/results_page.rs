//! Results page parsing.
//!
//! The results page lists one row per document in `#resultsTable`. Columns
//! are read by name through [`ResultsColumn`]; the table's shape is checked
//! once per row so that a layout change fails loudly instead of shifting
//! values into the wrong fields.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::errors::TableShapeError;
use super::record::{DocumentLink, SupplementRow};

/// Message the portal shows when an identifier has no documents.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

static RESULTS_TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#resultsTable").expect("valid results table selector"));
static INFO_MESSAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".message-box.info").expect("valid message selector"));
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid row selector"));
static HEAD: Lazy<Selector> = Lazy::new(|| Selector::parse("thead").expect("valid head selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid link selector"));

/// Columns of the results table, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsColumn {
    Ident,
    City,
    State,
    Airport,
    NavAid,
    Chart,
    /// Volume back pages document. Doubles as the row category: decorative
    /// rows leave it empty.
    VolumeBackPages,
    AirportNavAidListing,
}

impl ResultsColumn {
    pub const ALL: [ResultsColumn; 8] = [
        ResultsColumn::Ident,
        ResultsColumn::City,
        ResultsColumn::State,
        ResultsColumn::Airport,
        ResultsColumn::NavAid,
        ResultsColumn::Chart,
        ResultsColumn::VolumeBackPages,
        ResultsColumn::AirportNavAidListing,
    ];

    /// Number of columns a data row carries.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based cell position.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// What a results page says about an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsPage {
    /// The portal's "no results" notice was shown.
    NoResults,
    /// The results table is absent or empty.
    TableMissing,
    /// Data rows in table order. May be empty.
    Rows(Vec<SupplementRow>),
}

/// Parses a results page.
///
/// The "no results" notice takes precedence over the table. The column
/// header is the `thead` row, or the first `th` row when the table has no
/// `thead`; it must name every column. Other rows without a non-empty
/// category cell, including heading rows made of `th`, are skipped.
pub fn parse_results_page(html: &str) -> Result<ResultsPage, TableShapeError> {
    let document = Html::parse_document(html);

    let no_results = document
        .select(&INFO_MESSAGE)
        .map(|message| message.text().collect::<String>())
        .collect::<String>();
    if no_results.trim() == NO_RESULTS_MESSAGE {
        return Ok(ResultsPage::NoResults);
    }

    let table = match document.select(&RESULTS_TABLE).next() {
        Some(table) if !table.inner_html().is_empty() => table,
        _ => return Ok(ResultsPage::TableMissing),
    };

    let has_head = table.select(&HEAD).next().is_some();
    let mut header_seen = false;
    let mut rows = Vec::new();
    for (position, row) in table.select(&ROW).enumerate() {
        let headers = child_cells(row, "th");
        if !headers.is_empty() {
            let is_column_header = if has_head {
                in_head(row)
            } else {
                !header_seen
            };
            if is_column_header {
                check_header(&headers)?;
                header_seen = true;
                continue;
            }
        }
        if let Some(row) = read_row(position, row)? {
            rows.push(row);
        }
    }

    Ok(ResultsPage::Rows(rows))
}

fn in_head(row: ElementRef<'_>) -> bool {
    row.parent()
        .and_then(ElementRef::wrap)
        .map_or(false, |parent| parent.value().name() == "thead")
}

fn check_header(headers: &[ElementRef<'_>]) -> Result<(), TableShapeError> {
    if headers.len() != ResultsColumn::COUNT {
        return Err(TableShapeError::UnexpectedHeader {
            found: headers.len(),
            expected: ResultsColumn::COUNT,
        });
    }
    Ok(())
}

fn read_row(position: usize, row: ElementRef<'_>) -> Result<Option<SupplementRow>, TableShapeError> {
    let cells = child_cells(row, "td");
    let category = cells
        .get(ResultsColumn::VolumeBackPages.index())
        .map(|cell| cell_text(*cell))
        .unwrap_or_default();
    if category.is_empty() {
        return Ok(None);
    }
    if cells.len() != ResultsColumn::COUNT {
        return Err(TableShapeError::ColumnCount {
            row: position,
            found: cells.len(),
            expected: ResultsColumn::COUNT,
        });
    }

    let text = |column: ResultsColumn| cell_text(cells[column.index()]);
    let document = |column: ResultsColumn| DocumentLink {
        name: cell_text(cells[column.index()]),
        url: cell_link(cells[column.index()]),
    };

    Ok(Some(SupplementRow {
        ident: text(ResultsColumn::Ident),
        city: text(ResultsColumn::City),
        state: text(ResultsColumn::State),
        airport: text(ResultsColumn::Airport),
        nav_aid: text(ResultsColumn::NavAid),
        chart: text(ResultsColumn::Chart),
        vol_back_pages: document(ResultsColumn::VolumeBackPages),
        airport_nav_aid_listing: document(ResultsColumn::AirportNavAidListing),
    }))
}

/// Direct children of `row` with the given tag name.
fn child_cells<'a>(row: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| cell.value().name() == tag)
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn cell_link(cell: ElementRef<'_>) -> Option<String> {
    cell.select(&LINK)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(str::to_string)
}
