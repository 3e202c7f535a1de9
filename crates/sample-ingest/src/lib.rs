//! Accelerometer Sample Ingestion
//!
//! Reads timestamped tri-axial accelerometer rows from CSV and validates
//! them into `Sample` values. Malformed rows are dropped and counted,
//! never silently coerced.

mod error;
mod reader;
mod sample;

pub use error::IngestError;
pub use reader::{read_samples, IngestReport};
pub use sample::Sample;
