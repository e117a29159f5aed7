//! Closed registry of supported shape kinds.
//!
//! The registry is the only place that maps a kind to its literal tag and to its
//! rasterization rule. It holds no state; everything here is `const` or a pure
//! function and can be shared freely across threads.

use std::fmt;

use crate::error::CompareError;
use crate::mask::Surface;
use crate::raster;
use crate::shape::Shape;

/// Tag of a supported shape kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Point,
    Line,
    Circle,
    Ellipse,
    Rect,
    Polygon,
}

impl ShapeKind {
    /// Every supported kind, in registry order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Rect,
        ShapeKind::Polygon,
    ];

    /// Canonical literal tag.
    pub const fn tag(self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Rect => "rect",
            ShapeKind::Polygon => "polygon",
        }
    }

    /// Resolves a literal tag to its kind.
    ///
    /// `ellispe` is accepted as a legacy spelling of `ellipse`, since older shape
    /// data uses it.
    pub fn from_tag(tag: &str) -> Result<Self, CompareError> {
        match tag {
            "ellispe" => Ok(ShapeKind::Ellipse),
            _ => ShapeKind::ALL
                .into_iter()
                .find(|kind| kind.tag() == tag)
                .ok_or_else(|| CompareError::UnsupportedShapeKind(tag.to_string())),
        }
    }

    /// Whether shapes of this kind enclose an area, as opposed to marking a path.
    pub const fn is_filled(self) -> bool {
        !matches!(self, ShapeKind::Point | ShapeKind::Line)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Kinds callers can enumerate, e.g. to run a check against every supported shape.
#[inline]
pub fn supported_kinds() -> &'static [ShapeKind] {
    &ShapeKind::ALL
}

/// Draws `shape` into `surface` with the rule registered for its kind.
///
/// Coverage is OR-ed into the surface; nothing already covered is cleared.
pub fn rasterize<S: Surface + ?Sized>(shape: &Shape, surface: &mut S) {
    log::trace!(
        "rasterizing {} into {}x{} surface",
        shape.kind(),
        surface.width(),
        surface.height()
    );

    match shape {
        Shape::Point(p) => raster::point::rasterize(*p, surface),
        Shape::Line(line) => raster::line::rasterize(line, surface),
        Shape::Circle(circle) => raster::circle::rasterize(circle, surface),
        Shape::Ellipse(ellipse) => raster::ellipse::rasterize(ellipse, surface),
        Shape::Rect(rect) => raster::rect::rasterize(*rect, surface),
        Shape::Polygon(polygon) => raster::polygon::rasterize(polygon, surface),
    }
}
