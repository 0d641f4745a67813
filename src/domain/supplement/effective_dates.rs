//! Effective date range of a publication cycle.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::DateRangeError;

/// Start and end of a cycle, both at midnight UTC.
///
/// Both dates carry the year printed in the cycle text, so for a cycle that
/// runs from December into January `end_date` lands before `start_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveDateRange {
    #[serde(rename = "effectiveStartDate")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "effectiveEndDate")]
    pub end_date: DateTime<Utc>,
}

impl EffectiveDateRange {
    /// Parses cycle option text such as `"JAN 04 - JAN 31, 2024[2401]"`.
    ///
    /// Newlines and tabs anywhere in the text are ignored. Returns `Ok(None)`
    /// for empty text. Text without the `-` or `,` delimiters is an error.
    ///
    /// Month names may be abbreviated or spelled out (`JAN`, `June`, `SEPT`).
    /// Both dates take the year that follows the comma, even for a cycle
    /// that runs from December into January; that case is logged.
    pub fn parse(text: &str) -> Result<Option<Self>, DateRangeError> {
        let text = strip_control_whitespace(text);
        if text.trim().is_empty() {
            return Ok(None);
        }

        let (start_month_day, remainder) = text
            .split_once('-')
            .ok_or(DateRangeError::MissingDelimiter('-'))?;
        let (end_month_day, year_and_cycle) = remainder
            .split_once(',')
            .ok_or(DateRangeError::MissingDelimiter(','))?;
        let year = year_and_cycle.split('[').next().unwrap_or_default();

        let start_date = midnight_utc(start_month_day, year)?;
        let end_date = midnight_utc(end_month_day, year)?;

        if start_date > end_date {
            tracing::warn!(
                start = %start_date.date_naive(),
                end = %end_date.date_naive(),
                "Cycle crosses a year boundary; both dates use the printed year"
            );
        }

        Ok(Some(Self {
            start_date,
            end_date,
        }))
    }
}

/// Removes newline and tab characters, which the portal sprinkles through
/// option text for layout.
pub fn strip_control_whitespace(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\t')).collect()
}

fn midnight_utc(month_day: &str, year: &str) -> Result<DateTime<Utc>, DateRangeError> {
    let text = format!("{} {}", month_day.trim(), year.trim());
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let invalid = || DateRangeError::InvalidDate {
        text: normalized.clone(),
    };

    let (month, rest) = normalized.split_once(' ').ok_or_else(invalid)?;
    // Only the first three letters name the month: "JUNE", "June" and "SEPT" all parse.
    let month: String = month.chars().take(3).collect();

    NaiveDate::parse_from_str(&format!("{} {}", month, rest), "%b %d %Y")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| invalid())
}
