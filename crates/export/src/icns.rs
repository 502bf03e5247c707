//! Apple multi-resolution icon
//!
//! The ICNS file is built by the platform tool: resamples are written into a
//! staging `.iconset` directory using Apple's naming scheme and `iconutil`
//! compresses that directory. The staging directory is owned by a
//! [`StagingDir`] guard and removed on every exit path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use icongen_config::IcnsConfig;
use painting::Canvas;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::ExportError;
use crate::artifact::{Artifact, ArtifactFormat};
use crate::png::save_png;

/// Converts a populated `.iconset` directory into an ICNS file
pub trait IconPackager {
    fn package(&self, iconset: &Path, output: &Path) -> Result<(), ExportError>;
}

/// Runs `<program> -c icns <iconset> -o <output>`
#[derive(Debug, Clone)]
pub struct IconutilPackager {
    program: String,
}

impl IconutilPackager {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl IconPackager for IconutilPackager {
    fn package(&self, iconset: &Path, output: &Path) -> Result<(), ExportError> {
        debug!("Running {} on {}", self.program, iconset.display());

        let result = Command::new(&self.program)
            .arg("-c")
            .arg("icns")
            .arg(iconset)
            .arg("-o")
            .arg(output)
            .output()
            .map_err(|source| ExportError::PackagerSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(ExportError::PackagerFailed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Temporary `.iconset` directory, deleted when dropped
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// Create a uniquely named `<stem>-<uuid>.iconset` under `parent`
    pub fn create_in(parent: &Path, stem: &str) -> Result<Self, ExportError> {
        let path = parent.join(format!("{stem}-{}.iconset", Uuid::new_v4()));
        fs::create_dir_all(&path).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Created staging directory {}", path.display());
        Ok(Self { path })
    }

    /// Create the staging directory under the system temp dir
    pub fn create(stem: &str) -> Result<Self, ExportError> {
        Self::create_in(&std::env::temp_dir(), stem)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        match fs::remove_dir_all(&self.path) {
            Ok(()) => debug!("Removed staging directory {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to remove staging directory {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

/// Iconset file names for each rendered size
///
/// A size is written as `icon_NxN.png` up to `base_max`, and from
/// `retina_min` up also as the `@2x` variant of half its size.
pub fn iconset_entries(config: &IcnsConfig) -> Vec<(u32, Vec<String>)> {
    config
        .sizes
        .iter()
        .map(|&size| {
            let mut names = Vec::with_capacity(2);
            if size <= config.base_max {
                names.push(format!("icon_{size}x{size}.png"));
            }
            if size >= config.retina_min {
                let half = size / 2;
                names.push(format!("icon_{half}x{half}@2x.png"));
            }
            (size, names)
        })
        .collect()
}

/// Stage the iconset and package it into `path`
pub fn write_icns(
    canvas: &Canvas,
    config: &IcnsConfig,
    packager: &impl IconPackager,
    path: &Path,
) -> Result<Artifact, ExportError> {
    let staging = StagingDir::create(&config.iconset_stem)?;
    stage_iconset(canvas, config, staging.path())?;
    packager.package(staging.path(), path)?;

    info!("Saved {}", path.display());
    Ok(Artifact::new(path, ArtifactFormat::Icns, config.sizes.clone()))
}

fn stage_iconset(canvas: &Canvas, config: &IcnsConfig, dir: &Path) -> Result<(), ExportError> {
    for (size, names) in iconset_entries(config) {
        if names.is_empty() {
            continue;
        }
        let resized = canvas.resample(size)?;
        for name in names {
            save_png(&resized, &dir.join(&name))?;
            debug!("Staged {name} ({size}x{size})");
        }
    }
    Ok(())
}
