//! Export Error Types

use thiserror::Error;

/// Errors while writing feature records (all fatal)
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failure
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
