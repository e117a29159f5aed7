use crate::coords::Vec2;
use crate::mask::Surface;
use crate::shape::Ellipse;

use super::{fill_where, point};

/// Covers every pixel whose center `(px, py)` satisfies
/// `((px - x) / r1)² + ((py - y) / r2)² <= 1`.
///
/// A zero radius on either axis leaves no area; the ellipse collapses to its
/// center point.
pub(crate) fn rasterize<S: Surface + ?Sized>(ellipse: &Ellipse, surface: &mut S) {
    let Ellipse { center, radii } = *ellipse;

    if radii.x == 0.0 || radii.y == 0.0 {
        point::rasterize(center, surface);
        return;
    }

    let inv = Vec2::new(1.0 / radii.x, 1.0 / radii.y);
    fill_where(surface, ellipse.bounds(), |c| {
        let dx = (c.x - center.x) * inv.x;
        let dy = (c.y - center.y) * inv.y;
        dx * dx + dy * dy <= 1.0
    });
}
