/// 8-bit straight-alpha color as stored in the exported files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    /// Convert to the f32 representation used by [`crate::surface::CpuSurface`]
    pub fn to_f32(self) -> [f32; 4] {
        self.0.map(|c| c as f32 / 255.0)
    }
}

/// Colors used to draw the icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPalette {
    /// Tile fill
    pub background: Rgba8,
    /// Subtle translucent edge around the tile
    pub border: Rgba8,
    /// Chevron and cursor
    pub accent: Rgba8,
}

impl Default for IconPalette {
    fn default() -> Self {
        Self {
            background: Rgba8([22, 27, 34, 255]),
            border: Rgba8([50, 60, 75, 120]),
            accent: Rgba8([100, 210, 255, 255]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = IconPalette::default();
        assert_eq!(palette.background.to_f32()[3], 1.0);
        assert_eq!(palette.accent.to_f32()[3], 1.0);
        // Border is the only translucent color
        assert!((palette.border.to_f32()[3] - 120.0 / 255.0).abs() < 1e-6);
    }
}
