//! Coordinate and geometry types shared by shapes and the rasterizer.
//!
//! Canonical grid space:
//! - One unit per pixel
//! - Origin top-left
//! - +X right, +Y down
//! - Pixel `(px, py)` covers `[px, px + 1) × [py, py + 1)` and is sampled at its center

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
