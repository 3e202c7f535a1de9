//! Ingestion Error Types

use thiserror::Error;

/// Errors during sample ingestion
#[derive(Debug, Error)]
pub enum IngestError {
    /// Timestamp text did not parse (recoverable: row is dropped)
    #[error("row {row}: unparseable timestamp {value:?}")]
    BadTimestamp { row: usize, value: String },

    /// Axis value was non-numeric or non-finite (recoverable: row is dropped)
    #[error("row {row}: {field} value {value:?} is not a finite number")]
    BadAxisValue {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// Row had fewer columns than timestamp + three axes (recoverable)
    #[error("row {row}: expected 4 columns, found {found}")]
    ShortRow { row: usize, found: usize },

    /// CSV framing failure (fatal)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure (fatal)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
