//! Icon export for icongen
//!
//! Turns one master [`Canvas`] into every file an application bundle needs:
//! - plain PNGs at fixed sizes ([`png`])
//! - a Windows multi-resolution icon ([`icon_dir`])
//! - a macOS multi-resolution icon via `iconutil` ([`icns`])
//! - a small preview PNG
//!
//! Every artifact is a resample of the same master canvas.

mod artifact;
pub mod icns;
pub mod icon_dir;
pub mod png;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use icongen_config::{ConfigError, ExportConfig, ICNS_FILE_NAME, ICO_FILE_NAME};
use painting::{Canvas, RenderError};
use thiserror::Error;
use tracing::info;

pub use artifact::{Artifact, ArtifactFormat, ExportReport};
pub use icns::{IconPackager, IconutilPackager, StagingDir};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write icon container {path}: {source}")]
    Ico {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid export configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to run {program}: {source}")]
    PackagerSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    PackagerFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Writes all configured artifacts from a master canvas
pub struct Exporter<P = IconutilPackager> {
    config: ExportConfig,
    packager: P,
}

impl Exporter<IconutilPackager> {
    /// Exporter that packages ICNS with the configured command line tool
    pub fn new(config: ExportConfig) -> Result<Self, ExportError> {
        let packager = IconutilPackager::new(config.icns.packager.clone());
        Self::with_packager(config, packager)
    }
}

impl<P: IconPackager> Exporter<P> {
    pub fn with_packager(config: ExportConfig, packager: P) -> Result<Self, ExportError> {
        config.validate()?;
        Ok(Self { config, packager })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Write every artifact into `dir`, creating it if needed
    ///
    /// Existing files are overwritten. Stops at the first failure.
    pub fn export(&self, canvas: &Canvas, dir: impl AsRef<Path>) -> Result<ExportReport, ExportError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        info!(
            "Exporting {}x{} master into {}",
            canvas.edge_length(),
            canvas.edge_length(),
            dir.display()
        );

        let mut report = ExportReport::default();

        for target in &self.config.png_targets {
            report.push(png::write_png(canvas, target.size, &dir.join(&target.name))?);
        }

        report.push(icon_dir::write_ico(
            canvas,
            &self.config.ico_sizes,
            &dir.join(ICO_FILE_NAME),
        )?);

        report.push(icns::write_icns(
            canvas,
            &self.config.icns,
            &self.packager,
            &dir.join(ICNS_FILE_NAME),
        )?);

        let preview = &self.config.preview;
        report.push(png::write_png(canvas, preview.size, &dir.join(&preview.name))?);

        Ok(report)
    }
}

/// Export with the default layout and `iconutil`
pub fn export(canvas: &Canvas, dir: impl AsRef<Path>) -> Result<ExportReport, ExportError> {
    Exporter::new(ExportConfig::default())?.export(canvas, dir)
}
