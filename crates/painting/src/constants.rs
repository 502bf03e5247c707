/// Largest master canvas edge accepted by the renderer.
pub const MAX_EDGE_LENGTH: u32 = 8192;

/// Outer padding as a fraction of the edge length.
pub const PADDING_FRACTION: f64 = 0.06;

/// Background corner radius as a fraction of the edge length.
pub const CORNER_RADIUS_FRACTION: f64 = 0.22;

/// Glyph stroke width as a fraction of the edge length.
pub const STROKE_WIDTH_FRACTION: f64 = 0.05;

/// Chevron height and width as fractions of the edge length.
pub const CHEVRON_HEIGHT_FRACTION: f64 = 0.22;
pub const CHEVRON_WIDTH_FRACTION: f64 = 0.14;

/// Chevron left edge, measured leftwards from the center.
pub const CHEVRON_OFFSET_FRACTION: f64 = 0.16;

/// Cursor block size as fractions of the edge length.
pub const CURSOR_WIDTH_FRACTION: f64 = 0.16;
pub const CURSOR_HEIGHT_FRACTION: f64 = 0.05;

/// Cursor top-left offset from the center (x, y).
pub const CURSOR_OFFSET_X_FRACTION: f64 = 0.04;
pub const CURSOR_OFFSET_Y_FRACTION: f64 = 0.06;

/// Border stroke never gets thinner than this many pixels.
pub const MIN_BORDER_WIDTH: u32 = 2;

/// One border pixel per this many pixels of edge length.
pub const BORDER_WIDTH_DIVISOR: u32 = 256;
