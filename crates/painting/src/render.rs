//! Icon renderer
//!
//! Draws the `>_` terminal icon onto a fresh [`CpuSurface`] and freezes the
//! result into a [`Canvas`]. Draw order:
//! 1. Rounded tile background
//! 2. Translucent border stroke along the tile edge
//! 3. Chevron polyline with a rounded joint
//! 4. Rounded cursor block

use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::geometry::IconGeometry;
use crate::surface::CpuSurface;
use crate::types::IconPalette;
use crate::validation::{RenderError, validate_edge_length};

/// A finished, read-only square icon raster
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Edge length in pixels
    pub fn edge_length(&self) -> u32 {
        self.image.width()
    }

    /// Borrow the 8-bit RGBA pixels
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// High-quality (Lanczos3) resample to `size x size`
    pub fn resample(&self, size: u32) -> Result<RgbaImage, RenderError> {
        validate_edge_length(size)?;
        if size == self.edge_length() {
            return Ok(self.image.clone());
        }
        Ok(imageops::resize(&self.image, size, size, FilterType::Lanczos3))
    }
}

/// Renders the icon at any edge length with a fixed palette
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    palette: IconPalette,
}

impl IconRenderer {
    /// Draw the icon on a square canvas of `edge` pixels
    pub fn render(&self, edge: u32) -> Result<Canvas, RenderError> {
        validate_edge_length(edge)?;

        let geometry = IconGeometry::for_edge(edge);
        debug!("IconRenderer::render: {:?}", geometry);

        let mut surface = CpuSurface::new(edge, edge);
        let tile = geometry.background();
        let accent = self.palette.accent.to_f32();

        surface.fill_shape(&tile, self.palette.background.to_f32());
        surface.fill_shape(
            &tile.outline(geometry.border_width as f32),
            self.palette.border.to_f32(),
        );
        let chevron = surface.fill_shape(&geometry.chevron(), accent);
        let cursor = surface.fill_shape(&geometry.cursor(), accent);
        debug!("  -> chevron bbox={:?}, cursor bbox={:?}", chevron, cursor);

        Ok(Canvas {
            image: surface.to_rgba_image(),
        })
    }
}

/// Render with the default palette
pub fn render(edge: u32) -> Result<Canvas, RenderError> {
    IconRenderer::default().render(edge)
}
