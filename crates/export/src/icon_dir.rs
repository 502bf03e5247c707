//! Windows multi-resolution icon

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use painting::Canvas;
use tracing::{debug, info};

use crate::ExportError;
use crate::artifact::{Artifact, ArtifactFormat};

/// Bundle one resample per size into an ICO file
///
/// Entries are stored in the given order, so with ascending sizes the
/// smallest frame comes first.
pub fn write_ico(canvas: &Canvas, sizes: &[u32], path: &Path) -> Result<Artifact, ExportError> {
    let ico_error = |source| ExportError::Ico {
        path: path.to_path_buf(),
        source,
    };

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for &size in sizes {
        let resized = canvas.resample(size)?;
        let image = IconImage::from_rgba_data(size, size, resized.into_raw());
        let entry = IconDirEntry::encode(&image).map_err(ico_error)?;
        icon_dir.add_entry(entry);
        debug!("ICO layer: {size}x{size}");
    }

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    icon_dir.write(&mut writer).map_err(ico_error)?;
    writer.flush().map_err(ico_error)?;

    info!("Saved {} (sizes {:?})", path.display(), sizes);
    Ok(Artifact::new(path, ArtifactFormat::Ico, sizes.to_vec()))
}
