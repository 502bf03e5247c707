//! icongen - renders the application icon and exports it for bundling
//!
//! Takes no arguments. Output lands in the workspace `icons/` directory.
//! Set RUST_LOG (e.g. RUST_LOG=debug) for more detail.

use std::path::{Path, PathBuf};

use anyhow::Context;
use icongen_config::ExportConfig;
use icongen_export::Exporter;
use tracing::info;

mod logging;

/// Fixed output location, resolved relative to this crate
fn output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../icons")
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = ExportConfig::default();
    let exporter = Exporter::new(config).context("invalid export configuration")?;

    let edge = exporter.config().master_edge;
    let canvas = painting::render(edge)
        .with_context(|| format!("failed to render {edge}x{edge} master icon"))?;

    let dir = output_dir();
    let report = exporter
        .export(&canvas, &dir)
        .with_context(|| format!("failed to export icons into {}", dir.display()))?;

    info!("Done! Wrote {} artifacts", report.artifacts.len());
    Ok(())
}
