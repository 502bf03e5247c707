//! CPU surface for icon drawing - straight-alpha f32 RGBA storage

/// An f32 RGBA CPU surface that shapes are composited onto
/// Stores pixels as [f32; 4] with straight (non-premultiplied) alpha
pub struct CpuSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a] in 0..=1
    pixels: Vec<[f32; 4]>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0.0, 0.0, 0.0, 0.0]; pixel_count],
        }
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Composite a color over an existing pixel ("source over")
    ///
    /// `coverage` scales the source alpha and carries the anti-aliasing
    /// factor of the shape being drawn.
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4], coverage: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let src_alpha = color[3] * coverage.clamp(0.0, 1.0);
        if src_alpha <= 0.0 {
            return;
        }

        let index = (y as usize) * (self.width as usize) + (x as usize);
        let dst = self.pixels[index];
        let dst_weight = dst[3] * (1.0 - src_alpha);
        let out_alpha = src_alpha + dst_weight;

        // Straight alpha: un-premultiply after mixing
        let mix = |s: f32, d: f32| (s * src_alpha + d * dst_weight) / out_alpha;
        self.pixels[index] = [
            mix(color[0], dst[0]),
            mix(color[1], dst[1]),
            mix(color[2], dst[2]),
            out_alpha,
        ];
    }

    /// Quantize to an 8-bit RGBA image
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let index = (y as usize) * (self.width as usize) + (x as usize);
            image::Rgba(self.pixels[index].map(quantize))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn test_new_surface() {
        let surface = CpuSurface::new(100, 50);
        assert_eq!(surface.width, 100);
        assert_eq!(surface.height, 50);
        assert_eq!(surface.get_pixel(0, 0), Some([0.0; 4]));
        assert_eq!(surface.get_pixel(99, 49), Some([0.0; 4]));

        // Out of bounds should return None
        assert_eq!(surface.get_pixel(100, 0), None);
        assert_eq!(surface.get_pixel(0, 50), None);
    }

    #[test]
    fn test_blend_over_opaque() {
        let mut surface = CpuSurface::new(10, 10);
        surface.blend_pixel(5, 5, WHITE, 1.0);
        assert_eq!(surface.get_pixel(5, 5), Some(WHITE));

        // 50% coverage of opaque red over white
        surface.blend_pixel(5, 5, [1.0, 0.0, 0.0, 1.0], 0.5);

        let result = surface.get_pixel(5, 5).unwrap();
        assert!((result[0] - 1.0).abs() < 1e-5);
        assert!((result[1] - 0.5).abs() < 1e-5);
        assert!((result[2] - 0.5).abs() < 1e-5);
        assert!((result[3] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_blend_over_transparent_keeps_color() {
        let mut surface = CpuSurface::new(4, 4);
        surface.blend_pixel(1, 1, [0.2, 0.4, 0.6, 1.0], 0.25);

        let result = surface.get_pixel(1, 1).unwrap();
        // Straight alpha: color is not darkened by partial coverage
        assert!((result[0] - 0.2).abs() < 1e-5);
        assert!((result[1] - 0.4).abs() < 1e-5);
        assert!((result[2] - 0.6).abs() < 1e-5);
        assert!((result[3] - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_zero_coverage_is_noop() {
        let mut surface = CpuSurface::new(2, 2);
        surface.blend_pixel(0, 0, WHITE, 0.0);
        assert_eq!(surface.get_pixel(0, 0), Some([0.0; 4]));

        // Out of bounds blends are ignored
        surface.blend_pixel(2, 0, WHITE, 1.0);
        assert_eq!(surface.get_pixel(1, 0), Some([0.0; 4]));
    }

    #[test]
    fn test_to_rgba_image() {
        let mut surface = CpuSurface::new(3, 2);
        surface.blend_pixel(2, 1, [1.0, 0.0, 0.5, 1.0], 1.0);
        surface.blend_pixel(0, 1, [0.0, 1.0, 0.0, 1.0], 0.5);

        let image = surface.to_rgba_image();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1).0, [255, 0, 128, 255]);
        assert_eq!(image.get_pixel(0, 1).0, [0, 255, 0, 128]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
        // Row-major order: nothing leaks into the transposed position
        assert_eq!(image.get_pixel(1, 0).0, [0, 0, 0, 0]);
    }
}
