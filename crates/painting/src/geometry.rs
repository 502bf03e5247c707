//! Proportional icon layout
//!
//! All lengths are whole pixels derived from the edge length by truncation,
//! so a given edge always yields the same layout.
//!
//! Rectangle corners name pixels with inclusive ends: a rect from `a` to `b`
//! covers pixel columns `a..=b`, so its continuous far edge sits at `b + 1`.

use glam::Vec2;

use crate::constants::*;
use crate::shapes::{Polyline, RoundedRect};
use crate::validation::fraction_of;

/// Pixel geometry of the `>_` icon for one edge length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub edge: u32,
    /// Transparent margin around the tile
    pub padding: u32,
    pub corner_radius: u32,
    pub border_width: u32,
    pub stroke_width: u32,
    /// Chevron bounding box: top-left corner plus size
    pub chevron_x: u32,
    pub chevron_y: u32,
    pub chevron_width: u32,
    pub chevron_height: u32,
    /// Cursor block: top-left corner plus size
    pub cursor_x: u32,
    pub cursor_y: u32,
    pub cursor_width: u32,
    pub cursor_height: u32,
}

impl IconGeometry {
    /// Compute the layout for a canvas with the given edge length
    pub fn for_edge(edge: u32) -> Self {
        let center = edge / 2;
        let chevron_height = fraction_of(edge, CHEVRON_HEIGHT_FRACTION);

        Self {
            edge,
            padding: fraction_of(edge, PADDING_FRACTION),
            corner_radius: fraction_of(edge, CORNER_RADIUS_FRACTION),
            border_width: (edge / BORDER_WIDTH_DIVISOR).max(MIN_BORDER_WIDTH),
            stroke_width: fraction_of(edge, STROKE_WIDTH_FRACTION),
            chevron_x: center.saturating_sub(fraction_of(edge, CHEVRON_OFFSET_FRACTION)),
            chevron_y: center - chevron_height / 2,
            chevron_width: fraction_of(edge, CHEVRON_WIDTH_FRACTION),
            chevron_height,
            cursor_x: center + fraction_of(edge, CURSOR_OFFSET_X_FRACTION),
            cursor_y: center + fraction_of(edge, CURSOR_OFFSET_Y_FRACTION),
            cursor_width: fraction_of(edge, CURSOR_WIDTH_FRACTION),
            cursor_height: fraction_of(edge, CURSOR_HEIGHT_FRACTION),
        }
    }

    /// The tile spanning pixels `padding..=edge - padding`
    pub fn background(&self) -> RoundedRect {
        let near = self.padding as f32;
        let far = (self.edge - self.padding + 1) as f32;
        RoundedRect::new(
            Vec2::splat(near),
            Vec2::splat(far),
            self.corner_radius as f32,
        )
    }

    /// Three-point `>` stroke: top, tip, bottom
    pub fn chevron(&self) -> Polyline {
        let x = self.chevron_x as f32;
        let y = self.chevron_y as f32;
        let tip = Vec2::new(
            (self.chevron_x + self.chevron_width) as f32,
            (self.chevron_y + self.chevron_height / 2) as f32,
        );
        Polyline::new(
            vec![
                Vec2::new(x, y),
                tip,
                Vec2::new(x, (self.chevron_y + self.chevron_height) as f32),
            ],
            self.stroke_width as f32,
        )
    }

    /// The `_` cursor block to the right of the chevron
    pub fn cursor(&self) -> RoundedRect {
        let min = Vec2::new(self.cursor_x as f32, self.cursor_y as f32);
        let size = Vec2::new(self.cursor_width as f32, self.cursor_height as f32);
        RoundedRect::new(min, min + size + 1.0, (self.cursor_height / 4) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_geometry() {
        let g = IconGeometry::for_edge(1024);
        assert_eq!(g.padding, 61);
        assert_eq!(g.corner_radius, 225);
        assert_eq!(g.border_width, 4);
        assert_eq!(g.stroke_width, 51);
        assert_eq!(g.chevron_height, 225);
        assert_eq!(g.chevron_width, 143);
        assert_eq!(g.chevron_x, 512 - 163);
        assert_eq!(g.chevron_y, 512 - 112);
        assert_eq!((g.cursor_x, g.cursor_y), (512 + 40, 512 + 61));
        assert_eq!((g.cursor_width, g.cursor_height), (163, 51));
    }

    #[test]
    fn test_small_edge_border_floor() {
        let g = IconGeometry::for_edge(32);
        assert_eq!(g.border_width, MIN_BORDER_WIDTH);
        assert_eq!(g.padding, 1);
    }

    #[test]
    fn test_glyph_inside_tile() {
        for edge in [32, 64, 128, 512, 1024] {
            let g = IconGeometry::for_edge(edge);
            let (tile_min, tile_max) = {
                let bg = g.background();
                (bg.min, bg.max)
            };
            let chevron = g.chevron();
            for p in &chevron.points {
                assert!(p.x > tile_min.x && p.x < tile_max.x, "edge {edge}");
                assert!(p.y > tile_min.y && p.y < tile_max.y, "edge {edge}");
            }
            let cursor = g.cursor();
            assert!(cursor.max.x < tile_max.x && cursor.max.y < tile_max.y);
        }
    }

    #[test]
    fn test_rect_far_edges_are_inclusive() {
        let g = IconGeometry::for_edge(1024);
        let tile = g.background();
        assert_eq!(tile.min, Vec2::splat(61.0));
        assert_eq!(tile.max, Vec2::splat(964.0));

        let cursor = g.cursor();
        assert_eq!(cursor.min, Vec2::new(552.0, 573.0));
        assert_eq!(cursor.max, Vec2::new(552.0 + 164.0, 573.0 + 52.0));
    }

    #[test]
    fn test_chevron_points_right() {
        let chevron = IconGeometry::for_edge(1024).chevron();
        assert_eq!(chevron.points.len(), 3);
        let [top, tip, bottom] = [chevron.points[0], chevron.points[1], chevron.points[2]];
        assert!(tip.x > top.x);
        assert_eq!(top.x, bottom.x);
        assert!(top.y < tip.y && tip.y < bottom.y);
    }
}
