//! Accelerometer Feature Pipeline
//!
//! Wires the batch flow together: CSV sample source → windower →
//! per-window feature extraction → CSV feature sink. Windows that cannot
//! produce features are skipped with a warning; sink failures abort the
//! run.

use feature_engine::{FeatureExtractor, Windower, DEFAULT_SAMPLE_RATE_HZ, DEFAULT_WINDOW_SIZE};
use feature_export::{ExportError, FeatureWriter};
use sample_ingest::{read_samples, IngestError};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Pipeline configuration (canonical defaults: 450-sample windows, 30 Hz)
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Window length in samples
    pub window_size: usize,
    /// Effective sample rate of the recording device (Hz)
    pub sample_rate_hz: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
        }
    }
}

/// Counters for one pipeline run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Rows seen in the source file
    pub rows_read: usize,
    /// Rows dropped during validation
    pub rows_dropped: usize,
    /// Windows that produced a feature row
    pub windows_processed: usize,
    /// Windows skipped as degenerate
    pub windows_skipped: usize,
}

/// Fatal pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source could not be read
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Sink could not be written
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the batch pipeline over one input file.
///
/// Reads and validates all samples, slices them into windows, extracts
/// the seven features per window, and writes one CSV row per window in
/// window-index order.
pub fn run(
    config: &PipelineConfig,
    input: &Path,
    output: &Path,
) -> Result<RunSummary, PipelineError> {
    let ingest = read_samples(input)?;

    let windower = Windower::new(config.window_size);
    let mut extractor = FeatureExtractor::new(config.sample_rate_hz);
    let mut writer = FeatureWriter::create(output)?;

    let mut summary = RunSummary {
        rows_read: ingest.rows_read,
        rows_dropped: ingest.rows_dropped,
        ..Default::default()
    };

    for window in windower.windows(&ingest.samples) {
        match extractor.extract(&window) {
            Ok(record) => {
                writer.write(&record)?;
                summary.windows_processed += 1;
            }
            Err(err) => {
                warn!("skipping window {}: {err}", window.index());
                summary.windows_skipped += 1;
            }
        }
    }

    writer.finish()?;
    info!(
        "processed {} windows from {} samples",
        summary.windows_processed,
        ingest.samples.len()
    );

    Ok(summary)
}
