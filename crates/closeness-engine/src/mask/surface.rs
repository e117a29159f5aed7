/// Minimal drawing surface consumed by the rasterizer.
///
/// Coordinates are pixel indices with the origin at the top-left. Writes outside
/// `width() × height()` are ignored; shapes are clipped silently.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Marks pixel `(x, y)` as covered.
    fn set_covered(&mut self, x: u32, y: u32);

    fn is_covered(&self, x: u32, y: u32) -> bool;

    /// Resets every pixel to uncovered.
    fn clear(&mut self);

    /// Marks the half-open run `x_start..x_end` on row `y` as covered.
    fn fill_span(&mut self, y: u32, x_start: u32, x_end: u32) {
        for x in x_start..x_end.min(self.width()) {
            self.set_covered(x, y);
        }
    }
}
