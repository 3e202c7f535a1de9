//! CSV Feature Writer
//!
//! Output columns: `window_index, mean_vm, sd_vm, mean_angle, sd_angle,
//! p625, dominant_freq, fpdf` (header row written from the record's
//! field names on the first row).

use crate::error::ExportError;
use feature_engine::FeatureRecord;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Writes feature records to a CSV file
pub struct FeatureWriter {
    inner: csv::Writer<File>,
    rows_written: usize,
}

impl FeatureWriter {
    /// Create (or truncate) the output file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let inner = csv::Writer::from_path(path.as_ref())?;
        Ok(Self {
            inner,
            rows_written: 0,
        })
    }

    /// Append one record
    pub fn write(&mut self, record: &FeatureRecord) -> Result<(), ExportError> {
        self.inner.serialize(record)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Append records in order
    pub fn write_all(&mut self, records: &[FeatureRecord]) -> Result<(), ExportError> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Flush and report how many rows were written
    pub fn finish(mut self) -> Result<usize, ExportError> {
        self.inner.flush()?;
        info!("wrote {} feature rows", self.rows_written);
        Ok(self.rows_written)
    }
}
