//! Scan conversion of shapes into a [`Surface`].
//!
//! Sampling model: pixel `(px, py)` is covered when its center
//! `(px + 0.5, py + 0.5)` satisfies the shape's membership rule. Points and lines
//! mark the pixels their path passes through instead. A circle or ellipse with a
//! zero radius collapses to its center pixel; zero-area rects and collinear
//! polygons cover nothing.
//!
//! Every rule ORs into the surface and never reads it back. Anything outside the
//! surface bounds is dropped.

pub(crate) mod circle;
pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod point;
pub(crate) mod polygon;
pub(crate) mod rect;

use crate::coords::{Rect, Vec2};
use crate::mask::Surface;

/// Marks pixel `(px, py)` if it lies on the surface.
#[inline]
pub(crate) fn plot<S: Surface + ?Sized>(surface: &mut S, px: i64, py: i64) {
    if px >= 0 && py >= 0 && px < i64::from(surface.width()) && py < i64::from(surface.height()) {
        surface.set_covered(px as u32, py as u32);
    }
}

/// Pixel indices whose centers lie in `[lo, hi)`, clipped to `0..limit`.
///
/// Returns a half-open `(start, end)` pair; `start == end` when empty.
#[inline]
pub(crate) fn center_range(lo: f32, hi: f32, limit: u32) -> (u32, u32) {
    let max = limit as f32;
    let start = (lo - 0.5).ceil().clamp(0.0, max);
    let end = (hi - 0.5).ceil().clamp(0.0, max).max(start);
    (start as u32, end as u32)
}

/// Pixel indices whose centers lie in `[lo, hi]`, clipped to `0..limit`.
///
/// Returns a half-open `(start, end)` pair; `start == end` when empty.
#[inline]
pub(crate) fn center_range_inclusive(lo: f32, hi: f32, limit: u32) -> (u32, u32) {
    let max = limit as f32;
    let start = (lo - 0.5).ceil().clamp(0.0, max);
    let end = ((hi - 0.5).floor() + 1.0).clamp(0.0, max).max(start);
    (start as u32, end as u32)
}

/// Covers every pixel inside `bounds` whose center satisfies `inside`.
pub(crate) fn fill_where<S, F>(surface: &mut S, bounds: Rect, inside: F)
where
    S: Surface + ?Sized,
    F: Fn(Vec2) -> bool,
{
    let min = bounds.min();
    let max = bounds.max();
    let (y0, y1) = center_range_inclusive(min.y, max.y, surface.height());
    let (x0, x1) = center_range_inclusive(min.x, max.x, surface.width());

    for py in y0..y1 {
        let cy = py as f32 + 0.5;
        for px in x0..x1 {
            if inside(Vec2::new(px as f32 + 0.5, cy)) {
                surface.set_covered(px, py);
            }
        }
    }
}
