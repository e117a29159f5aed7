use crate::coords::{Rect, Vec2};
use crate::mask::Surface;
use crate::shape::Line;

use super::plot;

/// Marks the pixels along the segment with Bresenham's algorithm, from the pixel
/// containing `from` to the pixel containing `to`.
///
/// The segment is clipped to the surface (grown by one pixel) first, so the walk
/// is bounded by the surface size no matter how far away the endpoints are.
pub(crate) fn rasterize<S: Surface + ?Sized>(line: &Line, surface: &mut S) {
    let clip = Rect::new(0.0, 0.0, surface.width() as f32, surface.height() as f32).inflate(1.0);
    let Some((from, to)) = clip_segment(line.from, line.to, clip) else {
        return;
    };

    let (mut x, mut y) = from.pixel();
    let (x1, y1) = to.pixel();

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(surface, x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

fn outcode(p: (f64, f64), min: (f64, f64), max: (f64, f64)) -> u8 {
    let mut code = 0;
    if p.0 < min.0 {
        code |= LEFT;
    } else if p.0 > max.0 {
        code |= RIGHT;
    }
    if p.1 < min.1 {
        code |= TOP;
    } else if p.1 > max.1 {
        code |= BOTTOM;
    }
    code
}

/// Cohen-Sutherland clip of the segment `from..to` against `clip`.
///
/// Returns `None` when the segment misses `clip` entirely. Endpoints already inside
/// are returned unchanged; clipped endpoints land exactly on the clip boundary.
/// Intersections are computed in `f64` so extreme `f32` inputs cannot overflow.
pub(crate) fn clip_segment(from: Vec2, to: Vec2, clip: Rect) -> Option<(Vec2, Vec2)> {
    let min = (f64::from(clip.min().x), f64::from(clip.min().y));
    let max = (f64::from(clip.max().x), f64::from(clip.max().y));
    let mut a = (f64::from(from.x), f64::from(from.y));
    let mut b = (f64::from(to.x), f64::from(to.y));

    // Each pass moves one endpoint onto a boundary.
    for _ in 0..8 {
        let (ca, cb) = (outcode(a, min, max), outcode(b, min, max));
        if ca | cb == 0 {
            break;
        }
        if ca & cb != 0 {
            return None;
        }

        let code = if ca != 0 { ca } else { cb };
        let p = if code & BOTTOM != 0 {
            (a.0 + (b.0 - a.0) * (max.1 - a.1) / (b.1 - a.1), max.1)
        } else if code & TOP != 0 {
            (a.0 + (b.0 - a.0) * (min.1 - a.1) / (b.1 - a.1), min.1)
        } else if code & RIGHT != 0 {
            (max.0, a.1 + (b.1 - a.1) * (max.0 - a.0) / (b.0 - a.0))
        } else {
            (min.0, a.1 + (b.1 - a.1) * (min.0 - a.0) / (b.0 - a.0))
        };

        if code == ca {
            a = p;
        } else {
            b = p;
        }
    }

    if outcode(a, min, max) | outcode(b, min, max) != 0 {
        return None;
    }
    Some((
        Vec2::new(a.0 as f32, a.1 as f32),
        Vec2::new(b.0 as f32, b.1 as f32),
    ))
}
