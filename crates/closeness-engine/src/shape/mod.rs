//! Shape descriptors.
//!
//! Responsibilities:
//! - describe the closed set of supported geometric kinds
//! - validate parameters before anything is rasterized
//! - keep kind-specific payloads isolated per file under `shape::*`
//!
//! Extending the set of shapes:
//! - add a payload module here
//! - add a variant to [`Shape`] and to [`ShapeKind`]
//! - add a matching rasterization rule under `raster::*`

mod circle;
mod ellipse;
mod line;
mod polygon;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use polygon::{FillRule, Polygon};

use crate::coords::{Rect, Vec2};
use crate::error::CompareError;
use crate::registry::ShapeKind;

/// A 2D shape in grid coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Vec2),
    Line(Line),
    Circle(Circle),
    Ellipse(Ellipse),
    Rect(Rect),
    Polygon(Polygon),
}

impl Shape {
    #[inline]
    pub fn point(x: f32, y: f32) -> Self {
        Shape::Point(Vec2::new(x, y))
    }

    #[inline]
    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Shape::Line(Line::new(Vec2::new(x1, y1), Vec2::new(x2, y2)))
    }

    #[inline]
    pub fn circle(x: f32, y: f32, r: f32) -> Self {
        Shape::Circle(Circle::new(Vec2::new(x, y), r))
    }

    #[inline]
    pub fn ellipse(x: f32, y: f32, r1: f32, r2: f32) -> Self {
        Shape::Ellipse(Ellipse::new(Vec2::new(x, y), Vec2::new(r1, r2)))
    }

    #[inline]
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Shape::Rect(Rect::new(x, y, width, height))
    }

    /// Even-odd filled polygon from `(x, y)` pairs.
    pub fn polygon(points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        Shape::Polygon(Polygon::new(
            points.into_iter().map(|(x, y)| Vec2::new(x, y)).collect(),
        ))
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Checks the parameter invariants of this shape.
    ///
    /// Fails with [`CompareError::InvalidShapeParameters`] on non-finite values,
    /// negative radii or sizes, or polygons with fewer than three points.
    pub fn validate(&self) -> Result<(), CompareError> {
        let kind = self.kind();
        match self {
            Shape::Point(p) => {
                if !p.is_finite() {
                    return Err(CompareError::invalid(kind, "coordinates must be finite"));
                }
            }
            Shape::Line(line) => {
                if !line.is_finite() {
                    return Err(CompareError::invalid(kind, "endpoints must be finite"));
                }
            }
            Shape::Circle(c) => {
                if !c.center.is_finite() || !c.radius.is_finite() {
                    return Err(CompareError::invalid(kind, "center and radius must be finite"));
                }
                if c.radius < 0.0 {
                    return Err(CompareError::invalid(kind, format!("radius {} is negative", c.radius)));
                }
            }
            Shape::Ellipse(e) => {
                if !e.center.is_finite() || !e.radii.is_finite() {
                    return Err(CompareError::invalid(kind, "center and radii must be finite"));
                }
                if e.radii.x < 0.0 || e.radii.y < 0.0 {
                    return Err(CompareError::invalid(
                        kind,
                        format!("radii ({}, {}) must not be negative", e.radii.x, e.radii.y),
                    ));
                }
            }
            Shape::Rect(r) => {
                if !r.is_finite() {
                    return Err(CompareError::invalid(kind, "origin and size must be finite"));
                }
                if r.size.x < 0.0 || r.size.y < 0.0 {
                    return Err(CompareError::invalid(
                        kind,
                        format!("size {}x{} must not be negative", r.size.x, r.size.y),
                    ));
                }
            }
            Shape::Polygon(poly) => {
                if poly.points.len() < 3 {
                    return Err(CompareError::invalid(
                        kind,
                        format!("needs at least 3 points, got {}", poly.points.len()),
                    ));
                }
                if let Some(i) = poly.points.iter().position(|p| !p.is_finite()) {
                    return Err(CompareError::invalid(kind, format!("point {} is not finite", i)));
                }
            }
        }
        Ok(())
    }

    /// Analytic area in square grid units; `0.0` for points and lines.
    ///
    /// Polygons use the absolute shoelace area, which undercounts
    /// self-intersecting outlines.
    pub fn area(&self) -> f32 {
        match self {
            Shape::Point(_) | Shape::Line(_) => 0.0,
            Shape::Circle(c) => c.area(),
            Shape::Ellipse(e) => e.area(),
            Shape::Rect(r) => r.size.x * r.size.y,
            Shape::Polygon(poly) => poly.signed_area().abs(),
        }
    }

    /// Axis-aligned bounding box in grid coordinates.
    ///
    /// Only meaningful for shapes that pass [`validate`](Self::validate).
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Point(p) => Rect::from_origin_size(*p, Vec2::zero()),
            Shape::Line(line) => line.bounds(),
            Shape::Circle(c) => c.bounds(),
            Shape::Ellipse(e) => e.bounds(),
            Shape::Rect(r) => *r,
            Shape::Polygon(poly) => poly.bounds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_reason(shape: Shape) -> String {
        match shape.validate() {
            Err(CompareError::InvalidShapeParameters { reason, .. }) => reason,
            other => panic!("expected InvalidShapeParameters, got {:?}", other),
        }
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn valid_shapes_pass() {
        let shapes = [
            Shape::point(50.0, 50.0),
            Shape::line(25.0, 25.0, 75.0, 75.0),
            Shape::circle(50.0, 50.0, 0.0),
            Shape::ellipse(50.0, 50.0, 12.0, 0.0),
            Shape::rect(-10.0, -10.0, 0.0, 5.0),
            Shape::polygon([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
        ];
        for shape in shapes {
            assert_eq!(shape.validate(), Ok(()), "{:?}", shape);
        }
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert!(invalid_reason(Shape::circle(0.0, 0.0, -1.0)).contains("negative"));
        assert!(invalid_reason(Shape::ellipse(0.0, 0.0, 1.0, -1.0)).contains("negative"));
    }

    #[test]
    fn negative_size_is_rejected() {
        assert!(invalid_reason(Shape::rect(0.0, 0.0, -5.0, 5.0)).contains("negative"));
        assert!(invalid_reason(Shape::rect(0.0, 0.0, 5.0, -5.0)).contains("negative"));
    }

    #[test]
    fn short_polygon_is_rejected() {
        let reason = invalid_reason(Shape::polygon([(0.0, 0.0), (1.0, 1.0)]));
        assert_eq!(reason, "needs at least 3 points, got 2");
    }

    #[test]
    fn non_finite_values_are_rejected() {
        invalid_reason(Shape::point(f32::NAN, 0.0));
        invalid_reason(Shape::line(0.0, 0.0, f32::INFINITY, 0.0));
        invalid_reason(Shape::circle(0.0, 0.0, f32::NAN));
        invalid_reason(Shape::ellipse(0.0, f32::NEG_INFINITY, 1.0, 1.0));
        invalid_reason(Shape::rect(0.0, 0.0, f32::INFINITY, 1.0));
        let reason = invalid_reason(Shape::polygon([(0.0, 0.0), (1.0, f32::NAN), (0.0, 1.0)]));
        assert_eq!(reason, "point 1 is not finite");
    }

    #[test]
    fn error_carries_kind() {
        match Shape::circle(0.0, 0.0, -2.0).validate() {
            Err(CompareError::InvalidShapeParameters { kind, .. }) => assert_eq!(kind, ShapeKind::Circle),
            other => panic!("unexpected {:?}", other),
        }
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn bounds_per_kind() {
        assert_eq!(Shape::point(3.0, 4.0).bounds(), Rect::new(3.0, 4.0, 0.0, 0.0));
        assert_eq!(Shape::line(10.0, 2.0, 4.0, 8.0).bounds(), Rect::new(4.0, 2.0, 6.0, 6.0));
        assert_eq!(Shape::circle(10.0, 10.0, 5.0).bounds(), Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(Shape::ellipse(10.0, 10.0, 4.0, 2.0).bounds(), Rect::new(6.0, 8.0, 8.0, 4.0));
        assert_eq!(Shape::rect(1.0, 2.0, 3.0, 4.0).bounds(), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            Shape::polygon([(50.0, 0.0), (100.0, 50.0), (50.0, 100.0), (0.0, 50.0)]).bounds(),
            Rect::new(0.0, 0.0, 100.0, 100.0)
        );
    }

    #[test]
    fn area_per_kind() {
        assert_eq!(Shape::point(3.0, 4.0).area(), 0.0);
        assert_eq!(Shape::line(0.0, 0.0, 10.0, 10.0).area(), 0.0);
        assert_eq!(Shape::rect(0.0, 0.0, 100.0, 50.0).area(), 5_000.0);
        assert_eq!(Shape::rect(10.0, 10.0, 0.0, 100.0).area(), 0.0);
        assert_eq!(Shape::circle(0.0, 0.0, 0.0).area(), 0.0);
        assert!((Shape::circle(0.0, 0.0, 10.0).area() - 314.159_27).abs() < 1e-3);
        assert!((Shape::ellipse(0.0, 0.0, 4.0, 2.0).area() - 25.132_742).abs() < 1e-4);
        assert_eq!(Shape::ellipse(0.0, 0.0, 0.0, 50.0).area(), 0.0);
        // Clockwise and counter-clockwise diamonds agree.
        let diamond = [(50.0, 0.0), (100.0, 50.0), (50.0, 100.0), (0.0, 50.0)];
        assert_eq!(Shape::polygon(diamond).area(), 5_000.0);
        assert_eq!(Shape::polygon(diamond.into_iter().rev()).area(), 5_000.0);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Shape::point(0.0, 0.0).kind(), ShapeKind::Point);
        assert_eq!(Shape::rect(0.0, 0.0, 1.0, 1.0).kind(), ShapeKind::Rect);
        assert_eq!(Shape::polygon([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).kind(), ShapeKind::Polygon);
    }
}
