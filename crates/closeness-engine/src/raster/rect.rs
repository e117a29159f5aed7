use crate::coords::Rect;
use crate::mask::Surface;

use super::fill_where;

/// Covers every pixel whose center lies in `[x, x + width) × [y, y + height)`.
///
/// A rectangle with zero width or height contains no pixel center and covers nothing.
pub(crate) fn rasterize<S: Surface + ?Sized>(rect: Rect, surface: &mut S) {
    if rect.is_empty() {
        return;
    }
    fill_where(surface, rect, |c| rect.contains(c));
}
