use crate::coords::{Rect, Vec2};

/// Filled disk payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        let r = Vec2::new(self.radius, self.radius);
        Rect::from_min_max(self.center - r, self.center + r)
    }

    /// Analytic area, `π r²`.
    #[inline]
    pub fn area(&self) -> f32 {
        core::f32::consts::PI * self.radius * self.radius
    }
}
