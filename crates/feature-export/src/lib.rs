//! Feature Record Export
//!
//! Serializes feature records to a headered CSV file, one row per window,
//! in window-index order.

mod error;
mod writer;

pub use error::ExportError;
pub use writer::FeatureWriter;
