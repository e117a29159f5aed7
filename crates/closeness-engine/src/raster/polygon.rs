use crate::mask::Surface;
use crate::shape::Polygon;

use super::{center_range, center_range_inclusive};

/// Scanline fill sampled at pixel centers.
///
/// For each pixel row the edges crossing `y = py + 0.5` are collected. Edges use a
/// half-open `[y_min, y_max)` interval so a shared vertex is counted once, and
/// horizontal edges never cross. Crossings are sorted by `x`; the run between two
/// neighbouring crossings is filled when the polygon's [`FillRule`] says the
/// accumulated winding is inside. A run covers pixel centers in `[x_a, x_b)`.
///
/// A polygon whose points are all collinear encloses nothing and covers no pixel.
///
/// [`FillRule`]: crate::shape::FillRule
pub(crate) fn rasterize<S: Surface + ?Sized>(polygon: &Polygon, surface: &mut S) {
    if polygon.is_collinear() {
        return;
    }

    let bounds = polygon.bounds();
    let (y0, y1) = center_range_inclusive(bounds.min().y, bounds.max().y, surface.height());
    let width = surface.width();

    // (x, direction): +1 for downward edges, -1 for upward ones.
    let mut crossings: Vec<(f32, i32)> = Vec::with_capacity(polygon.points.len());

    for py in y0..y1 {
        let y = py as f32 + 0.5;

        crossings.clear();
        for (a, b) in polygon.edges() {
            if a.y == b.y {
                continue;
            }
            let (lo, hi, dir) = if a.y < b.y { (a.y, b.y, 1) } else { (b.y, a.y, -1) };
            if y < lo || y >= hi {
                continue;
            }
            let t = (y - a.y) / (b.y - a.y);
            crossings.push((a.x + t * (b.x - a.x), dir));
        }
        crossings.sort_by(|l, r| l.0.total_cmp(&r.0));

        let mut winding = 0;
        for pair in crossings.windows(2) {
            winding += pair[0].1;
            if polygon.fill_rule.is_inside(winding) {
                let (x0, x1) = center_range(pair[0].0, pair[1].0, width);
                surface.fill_span(py, x0, x1);
            }
        }
    }
}
