//! Error types for indicator computation.
//!
//! The engine itself degrades to undefined values instead of failing; errors
//! exist only for constructor-level parameter problems and for the data
//! boundary where a bar sequence's ordering contract is checked.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for indicator operations that may fail.
pub type Result<T> = core::result::Result<T, KlineError>;

/// Errors raised by indicator construction and bar-sequence validation.
#[derive(Debug, Error)]
pub enum KlineError {
    /// Invalid period/window parameter.
    #[error("Invalid period: {0} (must be > 0)")]
    InvalidPeriod(usize),

    /// Input series lengths do not match.
    #[error("Series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Bar dates are not strictly ascending.
    #[error("Bars out of order at index {index}: {prev} followed by {next}")]
    UnorderedDates {
        /// Index of the offending bar.
        index: usize,
        /// Date of the preceding bar.
        prev: NaiveDate,
        /// Date of the offending bar.
        next: NaiveDate,
    },

    /// Two bars share the same date.
    #[error("Duplicate bar date at index {index}: {date}")]
    DuplicateDate {
        /// Index of the second occurrence.
        index: usize,
        /// The repeated date.
        date: NaiveDate,
    },
}
