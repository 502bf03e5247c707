//! Anti-aliased vector shapes for the CPU surface
//!
//! Every shape is described by a signed distance function (negative inside,
//! positive outside, in pixels). Pixel coverage is derived from the distance
//! at the pixel center, which gives a one-pixel analytic anti-aliasing ramp.

use glam::Vec2;
use tracing::debug;

use crate::surface::CpuSurface;

/// A shape that can be rasterized onto a [`CpuSurface`]
pub trait Shape {
    /// Signed distance from `point` to the shape edge
    fn signed_distance(&self, point: Vec2) -> f32;

    /// Axis-aligned bounds (min, max) enclosing every interior point
    fn bounds(&self) -> (Vec2, Vec2);
}

/// Coverage of a pixel whose center lies `distance` away from an edge
#[inline]
pub fn coverage_from_distance(distance: f32) -> f32 {
    (0.5 - distance).clamp(0.0, 1.0)
}

/// Rectangle with uniformly rounded corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub min: Vec2,
    pub max: Vec2,
    pub radius: f32,
}

impl RoundedRect {
    /// Create a rounded rectangle; the radius is clamped to half the shorter side
    pub fn new(min: Vec2, max: Vec2, radius: f32) -> Self {
        let half = (max - min) * 0.5;
        Self {
            min,
            max,
            radius: radius.clamp(0.0, half.x.min(half.y).max(0.0)),
        }
    }

    /// Outline of this rectangle, `width` pixels thick, lying inside the edge
    pub fn outline(self, width: f32) -> RoundedRectOutline {
        RoundedRectOutline { rect: self, width }
    }
}

impl Shape for RoundedRect {
    fn signed_distance(&self, point: Vec2) -> f32 {
        let center = (self.min + self.max) * 0.5;
        let half = (self.max - self.min) * 0.5;
        let q = (point - center).abs() - half + Vec2::splat(self.radius);
        q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0) - self.radius
    }

    fn bounds(&self) -> (Vec2, Vec2) {
        (self.min, self.max)
    }
}

/// Inward stroke of a [`RoundedRect`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectOutline {
    pub rect: RoundedRect,
    pub width: f32,
}

impl Shape for RoundedRectOutline {
    fn signed_distance(&self, point: Vec2) -> f32 {
        let d = self.rect.signed_distance(point);
        d.max(-d - self.width)
    }

    fn bounds(&self) -> (Vec2, Vec2) {
        self.rect.bounds()
    }
}

/// Stroked open polyline with round joints and butt end caps
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vec2>,
    pub width: f32,
}

impl Polyline {
    pub fn new(points: Vec<Vec2>, width: f32) -> Self {
        Self { points, width }
    }
}

impl Shape for Polyline {
    fn signed_distance(&self, point: Vec2) -> f32 {
        let half_width = self.width * 0.5;
        let mut distance = f32::INFINITY;

        for segment in self.points.windows(2) {
            distance = distance.min(segment_distance(point, segment[0], segment[1], half_width));
        }

        // Interior joints are filled with a disc, ends are left square
        if self.points.len() > 2 {
            for joint in &self.points[1..self.points.len() - 1] {
                distance = distance.min(point.distance(*joint) - half_width);
            }
        }

        distance
    }

    fn bounds(&self) -> (Vec2, Vec2) {
        let half = Vec2::splat(self.width * 0.5);
        let (min, max) = self.points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        (min - half, max + half)
    }
}

/// Distance to a segment swept by a square pen of `half_width`
fn segment_distance(point: Vec2, a: Vec2, b: Vec2, half_width: f32) -> f32 {
    let axis = b - a;
    let length = axis.length();
    if length <= f32::EPSILON {
        return point.distance(a) - half_width;
    }

    let direction = axis / length;
    let local = point - (a + b) * 0.5;
    let q = Vec2::new(
        local.dot(direction).abs() - length * 0.5,
        local.dot(direction.perp()).abs() - half_width,
    );
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0)
}

impl CpuSurface {
    /// Fill a shape with the given color
    /// Returns bounding box of affected region (x, y, width, height)
    /// Returns None if the shape is completely outside the surface
    pub fn fill_shape(&mut self, shape: &impl Shape, color: [f32; 4]) -> Option<(u32, u32, u32, u32)> {
        let (min, max) = shape.bounds();
        if !(min.is_finite() && max.is_finite()) {
            return None;
        }

        // One extra pixel on each side for the anti-aliasing ramp
        let x_min = ((min.x - 1.0).floor().max(0.0) as u32).min(self.width);
        let y_min = ((min.y - 1.0).floor().max(0.0) as u32).min(self.height);
        let x_max = ((max.x + 1.0).ceil().max(0.0) as u32).min(self.width);
        let y_max = ((max.y + 1.0).ceil().max(0.0) as u32).min(self.height);

        if x_min >= x_max || y_min >= y_max {
            debug!("  -> skipped: shape outside surface");
            return None;
        }

        for py in y_min..y_max {
            for px in x_min..x_max {
                let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = coverage_from_distance(shape.signed_distance(center));
                if coverage > 0.0 {
                    self.blend_pixel(px, py, color, coverage);
                }
            }
        }

        Some((x_min, y_min, x_max - x_min, y_max - y_min))
    }
}
