use crate::coords::{Rect, Vec2};

/// Rule deciding which pixels a polygon's outline encloses.
///
/// Both rules agree on simple (non-self-intersecting) polygons. They differ on
/// self-intersecting outlines: even-odd leaves doubly wound regions empty, non-zero
/// fills them.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum FillRule {
    #[default]
    EvenOdd,
    NonZero,
}

impl FillRule {
    /// Literal spelling used by the `fill:` property.
    pub fn tag(self) -> &'static str {
        match self {
            FillRule::EvenOdd => "evenodd",
            FillRule::NonZero => "nonzero",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "evenodd" | "even_odd" => Some(FillRule::EvenOdd),
            "nonzero" | "non_zero" => Some(FillRule::NonZero),
            _ => None,
        }
    }

    /// Whether a point with the given accumulated crossing state is inside.
    ///
    /// `winding` is the signed sum of crossed edge directions.
    #[inline]
    pub(crate) fn is_inside(self, winding: i32) -> bool {
        match self {
            FillRule::EvenOdd => winding % 2 != 0,
            FillRule::NonZero => winding != 0,
        }
    }
}

/// Closed polygon payload. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec2>,
    pub fill_rule: FillRule,
}

impl Polygon {
    #[inline]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points, fill_rule: FillRule::EvenOdd }
    }

    #[inline]
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    /// Closed edge list: `(p[i], p[i + 1])`, wrapping from the last point to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Bounding box of the points. Empty polygons yield an inverted, empty rect.
    pub fn bounds(&self) -> Rect {
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in &self.points {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Rect::from_min_max(min, max)
    }

    /// Shoelace signed area. Positive for clockwise outlines in y-down space.
    ///
    /// Self-intersecting outlines can have zero signed area while still enclosing
    /// pixels; use [`is_collinear`](Self::is_collinear) to detect flat polygons.
    pub fn signed_area(&self) -> f32 {
        0.5 * self.edges().map(|(a, b)| a.cross(b)).sum::<f32>()
    }

    /// True when every point lies on one line, so the outline encloses nothing.
    pub fn is_collinear(&self) -> bool {
        let Some(&origin) = self.points.first() else {
            return true;
        };
        let Some(&dir) = self.points.iter().find(|&&p| p != origin) else {
            return true;
        };
        let dir = dir - origin;
        self.points.iter().all(|&p| dir.cross(p - origin) == 0.0)
    }
}
