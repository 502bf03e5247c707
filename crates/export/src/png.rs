//! Plain PNG artifacts

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use painting::Canvas;
use tracing::info;

use crate::ExportError;
use crate::artifact::Artifact;

/// Encode an already resampled image as PNG, replacing any existing file
pub(crate) fn save_png(image: &RgbaImage, path: &Path) -> Result<(), ExportError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ExportError::Image {
            path: path.to_path_buf(),
            source,
        })
}

/// Resample the master canvas to `size` and write it to `path`
pub fn write_png(canvas: &Canvas, size: u32, path: &Path) -> Result<Artifact, ExportError> {
    let resized = canvas.resample(size)?;
    save_png(&resized, path)?;
    info!("Saved {} ({}x{})", path.display(), size, size);
    Ok(Artifact::png(path, size))
}
