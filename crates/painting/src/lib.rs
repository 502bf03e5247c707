//! Icon painting - procedural drawing of the `>_` application icon
//!
//! This crate provides the rasterization side of icon generation:
//! - [`surface`] - CPU f32 RGBA surface with alpha compositing
//! - [`shapes`] - Anti-aliased signed-distance shapes (rounded rects, polylines)
//! - [`geometry`] - Proportional icon layout for any edge length
//! - [`types`] - Palette and color types
//! - [`validation`] - Edge length checks and render errors
//! - [`render`] - The icon renderer and the immutable [`Canvas`] it produces

pub mod constants;
pub mod geometry;
pub mod render;
pub mod shapes;
pub mod surface;
pub mod types;
pub mod validation;

pub use constants::*;
pub use geometry::*;
pub use render::*;
pub use shapes::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
