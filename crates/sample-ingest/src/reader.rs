//! CSV Sample Reader
//!
//! Input layout (no header row): `timestamp, accel_x, accel_y, accel_z`.

use crate::error::IngestError;
use crate::sample::Sample;
use chrono::{DateTime, NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;
use tracing::{info, warn};

/// Fallback timestamp layout for sources that are not RFC 3339
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Outcome of reading one source file
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Samples that passed validation, in arrival order
    pub samples: Vec<Sample>,
    /// Total rows seen in the source
    pub rows_read: usize,
    /// Rows dropped because timestamp or an axis failed to parse
    pub rows_dropped: usize,
}

/// Read and validate all samples from a CSV file.
///
/// Malformed rows are dropped with a warning and counted in the report;
/// I/O and CSV framing failures abort the read.
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<IngestReport, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path.as_ref())?;

    let mut samples = Vec::new();
    let mut rows_read = 0;
    let mut rows_dropped = 0;

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;
        rows_read += 1;

        match parse_row(&record, row) {
            Ok(sample) => samples.push(sample),
            Err(err) => {
                warn!("dropping row: {err}");
                rows_dropped += 1;
            }
        }
    }

    info!(
        "loaded {} samples from {} rows ({} dropped)",
        samples.len(),
        rows_read,
        rows_dropped
    );

    Ok(IngestReport {
        samples,
        rows_read,
        rows_dropped,
    })
}

/// Validate one raw row into a `Sample`
fn parse_row(record: &StringRecord, row: usize) -> Result<Sample, IngestError> {
    if record.len() < 4 {
        return Err(IngestError::ShortRow {
            row,
            found: record.len(),
        });
    }

    let timestamp = parse_timestamp(&record[0], row)?;
    let x = parse_axis(&record[1], "accel_x", row)?;
    let y = parse_axis(&record[2], "accel_y", row)?;
    let z = parse_axis(&record[3], "accel_z", row)?;

    Ok(Sample { timestamp, x, y, z })
}

fn parse_timestamp(text: &str, row: usize) -> Result<DateTime<Utc>, IngestError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, NAIVE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| IngestError::BadTimestamp {
            row,
            value: text.to_string(),
        })
}

fn parse_axis(text: &str, field: &'static str, row: usize) -> Result<f64, IngestError> {
    let bad = || IngestError::BadAxisValue {
        row,
        field,
        value: text.to_string(),
    };
    let value: f64 = text.trim().parse().map_err(|_| bad())?;
    if !value.is_finite() {
        return Err(bad());
    }
    Ok(value)
}
