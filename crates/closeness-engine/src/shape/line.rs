use crate::coords::{Rect, Vec2};

/// Line segment payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
}

impl Line {
    #[inline]
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.from.is_finite() && self.to.is_finite()
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_min_max(
            Vec2::new(self.from.x.min(self.to.x), self.from.y.min(self.to.y)),
            Vec2::new(self.from.x.max(self.to.x), self.from.y.max(self.to.y)),
        )
    }
}
