//! Publication cycle selection.
//!
//! The search portal offers a `<select id="cycle">` whose options name the
//! "Current" cycle and, roughly 19 days before it ends, the "Next" one. Each
//! option's text carries the effective date range and its value carries the
//! cycle code used in results queries.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::effective_dates::{strip_control_whitespace, EffectiveDateRange};
use super::errors::DateRangeError;

static CYCLE_OPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("select#cycle > option").expect("valid cycle option selector"));

/// Which publication cycle to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CycleLabel {
    /// The cycle in effect now.
    #[default]
    Current,
    /// The upcoming cycle, only published shortly before the current one ends.
    Next,
}

impl CycleLabel {
    /// Text the portal uses to mark this cycle in its selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleLabel::Current => "Current",
            CycleLabel::Next => "Next",
        }
    }

    /// Parses a label, falling back to [`CycleLabel::Current`] for anything
    /// that is not a known label.
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::warn!(label, "Unknown cycle label, using Current");
            CycleLabel::default()
        })
    }
}

impl fmt::Display for CycleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is neither "Current" nor "Next".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cycle label: {0}")]
pub struct UnknownCycleLabel(pub String);

impl FromStr for CycleLabel {
    type Err = UnknownCycleLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(CycleLabel::Current),
            "next" => Ok(CycleLabel::Next),
            _ => Err(UnknownCycleLabel(s.to_string())),
        }
    }
}

/// A cycle option as published on the selection page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    pub label: CycleLabel,
    /// Raw option text, e.g. `"JAN 04 - JAN 31, 2024[2401]"` plus layout whitespace.
    pub display_text: String,
    /// Value of the option. `None` means the cycle is not currently published.
    pub code: Option<String>,
}

impl Cycle {
    /// Returns the cycle code if it is present and non-empty.
    pub fn search_code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }

    /// Parses the effective dates out of the option text.
    ///
    /// Returns `Ok(None)` when the option has no text to parse.
    pub fn effective_dates(&self) -> Result<Option<EffectiveDateRange>, DateRangeError> {
        let text = strip_control_whitespace(&self.display_text);
        if text.trim().is_empty() {
            return Ok(None);
        }
        EffectiveDateRange::parse(&text)
    }
}

/// Finds the option for `label` on the cycle selection page.
///
/// Matching is a case-sensitive substring test on the option text, and the
/// first matching option wins. Returns `None` when the page offers no such
/// cycle.
pub fn parse_cycle_page(html: &str, label: CycleLabel) -> Option<Cycle> {
    let document = Html::parse_document(html);

    document
        .select(&CYCLE_OPTION)
        .map(|option| (option.text().collect::<String>(), option))
        .find(|(text, _)| text.contains(label.as_str()))
        .map(|(display_text, option)| Cycle {
            label,
            display_text,
            code: option.value().attr("value").map(str::to_string),
        })
}
