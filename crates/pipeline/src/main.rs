//! Accelerometer Feature Pipeline - Main Entry Point

use anyhow::{bail, Context};
use pipeline::{init_logging, run, PipelineConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Accelerometer Feature Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let (input, output) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (input, output),
        _ => bail!("usage: accel-features <input.csv> <output.csv>"),
    };

    let config = PipelineConfig::default();
    let summary = run(&config, input.as_ref(), output.as_ref())
        .with_context(|| format!("processing {input}"))?;

    info!(
        "done: {} windows written ({} skipped), {} of {} rows dropped",
        summary.windows_processed,
        summary.windows_skipped,
        summary.rows_dropped,
        summary.rows_read
    );

    Ok(())
}
