//! Error types for supplement page parsing.

use thiserror::Error;

/// The cycle option text did not have the expected shape.
///
/// This means the portal changed its page format; callers should surface it
/// rather than swallow it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("cycle date text is missing the '{0}' delimiter")]
    MissingDelimiter(char),

    #[error("cycle date text has an unparseable date: '{text}'")]
    InvalidDate { text: String },
}

/// The results table no longer matches the expected column layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableShapeError {
    #[error("results table header has {found} columns, expected {expected}")]
    UnexpectedHeader { found: usize, expected: usize },

    #[error("results table row {row} has {found} cells, expected {expected}")]
    ColumnCount {
        row: usize,
        found: usize,
        expected: usize,
    },
}
