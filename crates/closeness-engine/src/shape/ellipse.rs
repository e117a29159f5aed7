use crate::coords::{Rect, Vec2};

/// Axis-aligned filled ellipse payload.
///
/// `radii.x` is the horizontal semi-axis (`r1`), `radii.y` the vertical one (`r2`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub radii: Vec2,
}

impl Ellipse {
    #[inline]
    pub fn new(center: Vec2, radii: Vec2) -> Self {
        Self { center, radii }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_min_max(self.center - self.radii, self.center + self.radii)
    }

    /// Analytic area, `π r1 r2`.
    #[inline]
    pub fn area(&self) -> f32 {
        core::f32::consts::PI * self.radii.x * self.radii.y
    }
}
