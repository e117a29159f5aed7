use crate::coords::Vec2;
use crate::mask::Surface;

use super::plot;

/// Marks the single pixel containing `p`, which is also the pixel whose center is
/// nearest to `p`.
pub(crate) fn rasterize<S: Surface + ?Sized>(p: Vec2, surface: &mut S) {
    let (px, py) = p.pixel();
    plot(surface, px, py);
}
