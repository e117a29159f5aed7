//! Shape literals to comparison requests.
//!
//! Bridges the `closeness-lit` AST to [`Shape`] values:
//!
//! ```text
//! grid    { width: 200 height: 200 }
//! circle  { x: 50 y: 50 r: 12.6 }
//! polygon { fill: nonzero  vertex { x: 50 y: 0 } vertex { x: 100 y: 50 } vertex { x: 0 y: 50 } }
//! ```
//!
//! | Tag | Properties |
//! |-----|------------|
//! | `point` | `x y` |
//! | `line` | `x1 y1 x2 y2` |
//! | `circle` | `x y r` |
//! | `ellipse` | `x y r1 r2` |
//! | `rect` | `x y width height` |
//! | `polygon` | `vertex { x y }` children, optional `fill: evenodd \| nonzero` |

use anyhow::Context;
use closeness_lit::{Document, Node, Value};

use crate::compare::{compare_shapes, CompareOptions};
use crate::coords::Vec2;
use crate::error::CompareError;
use crate::registry::ShapeKind;
use crate::shape::{FillRule, Polygon, Shape};

/// Name of the optional top-level node that sets the grid size.
pub const GRID_NODE: &str = "grid";

// ── shapes ────────────────────────────────────────────────────────────────

/// Builds a [`Shape`] from a literal node.
///
/// The node name is resolved through the registry. Missing or non-numeric
/// properties fail with [`CompareError::InvalidShapeParameters`]; parameter
/// ranges are left to [`Shape::validate`].
pub fn shape_from_node(node: &Node) -> Result<Shape, CompareError> {
    let kind = ShapeKind::from_tag(&node.name)?;
    let num = |key: &str| number(node, kind, key);

    let shape = match kind {
        ShapeKind::Point => Shape::point(num("x")?, num("y")?),
        ShapeKind::Line => Shape::line(num("x1")?, num("y1")?, num("x2")?, num("y2")?),
        ShapeKind::Circle => Shape::circle(num("x")?, num("y")?, num("r")?),
        ShapeKind::Ellipse => Shape::ellipse(num("x")?, num("y")?, num("r1")?, num("r2")?),
        ShapeKind::Rect => Shape::rect(num("x")?, num("y")?, num("width")?, num("height")?),
        ShapeKind::Polygon => Shape::Polygon(polygon_from_node(node)?),
    };
    Ok(shape)
}

fn polygon_from_node(node: &Node) -> Result<Polygon, CompareError> {
    let kind = ShapeKind::Polygon;
    let points = node
        .children_named("vertex")
        .map(|v| Ok(Vec2::new(number(v, kind, "x")?, number(v, kind, "y")?)))
        .collect::<Result<Vec<_>, CompareError>>()?;

    let fill_rule = match node.prop("fill") {
        None => FillRule::default(),
        Some(Value::Ident(tag)) => FillRule::from_tag(tag).ok_or_else(|| {
            CompareError::invalid(kind, format!("unknown fill rule `{}`", tag))
        })?,
        Some(Value::Number(_)) => {
            return Err(CompareError::invalid(kind, "`fill` must be `evenodd` or `nonzero`"));
        }
    };

    Ok(Polygon::new(points).with_fill_rule(fill_rule))
}

fn number(node: &Node, kind: ShapeKind, key: &str) -> Result<f32, CompareError> {
    match node.prop(key) {
        Some(Value::Number(v)) => Ok(*v as f32),
        Some(Value::Ident(s)) => Err(CompareError::invalid(
            kind,
            format!("`{}` must be a number, got `{}` (line {})", key, s, node.line),
        )),
        None => Err(CompareError::invalid(
            kind,
            format!("missing `{}` (line {})", key, node.line),
        )),
    }
}

// ── documents ─────────────────────────────────────────────────────────────

/// A comparison request read from a literal document.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSource {
    pub options: CompareOptions,
    /// Every non-`grid` top-level node, in source order.
    pub shapes: Vec<Shape>,
}

impl ComparisonSource {
    /// Collects the optional `grid` node into options and every other top-level
    /// node into a shape.
    ///
    /// Missing grid dimensions keep their defaults. A dimension that is not a
    /// whole number in `u32` range is reported as [`CompareError::InvalidGridSize`].
    /// If several `grid` nodes are present the last one wins.
    pub fn from_document(doc: &Document) -> Result<Self, CompareError> {
        let mut options = CompareOptions::default();
        let mut shapes = Vec::with_capacity(doc.nodes.len());

        for node in &doc.nodes {
            if node.name == GRID_NODE {
                options = grid_options(node);
                options.validate()?;
                continue;
            }
            let shape = shape_from_node(node).inspect_err(|e| {
                log::debug!("literal node `{}` at {}:{} rejected: {}", node.name, node.line, node.col, e);
            })?;
            shapes.push(shape);
        }

        Ok(Self { options, shapes })
    }

    /// Runs [`compare_shapes`] on the collected shapes.
    pub fn compare(&self) -> Result<f64, CompareError> {
        compare_shapes(&self.shapes, &self.options)
    }
}

fn grid_options(node: &Node) -> CompareOptions {
    let defaults = CompareOptions::default();
    let dim = |key: &str, default: u32| match node.prop(key) {
        None => default,
        Some(Value::Number(v)) if v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(v) => *v as u32,
        // Rejected by `CompareOptions::validate`.
        Some(_) => 0,
    };
    CompareOptions::new(dim("width", defaults.width), dim("height", defaults.height))
}

/// Parses `src`, builds the request and compares its two shapes.
pub fn compare_source(src: &str) -> anyhow::Result<f64> {
    let doc = closeness_lit::parse_str(src).context("failed to parse shape literal")?;
    let source = ComparisonSource::from_document(&doc).context("failed to build shapes from literal")?;
    let ratio = source.compare().context("failed to compare shapes")?;
    Ok(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use closeness_lit::{parse_str, ParseError};

    fn node(src: &str) -> Node {
        parse_str(src).unwrap().nodes.remove(0)
    }

    fn reason(err: CompareError) -> String {
        match err {
            CompareError::InvalidShapeParameters { reason, .. } => reason,
            other => panic!("expected InvalidShapeParameters, got {:?}", other),
        }
    }

    // ── shape_from_node ───────────────────────────────────────────────────

    #[test]
    fn every_kind_from_literal() {
        assert_eq!(shape_from_node(&node("point { x: 50 y: 50 }")), Ok(Shape::point(50.0, 50.0)));
        assert_eq!(
            shape_from_node(&node("line { x1: 25 y1: 25 x2: 75 y2: 75 }")),
            Ok(Shape::line(25.0, 25.0, 75.0, 75.0))
        );
        assert_eq!(shape_from_node(&node("circle { x: 50 y: 50 r: 12.5 }")), Ok(Shape::circle(50.0, 50.0, 12.5)));
        assert_eq!(
            shape_from_node(&node("ellipse { x: 50 y: 50 r1: 20 r2: 10 }")),
            Ok(Shape::ellipse(50.0, 50.0, 20.0, 10.0))
        );
        assert_eq!(
            shape_from_node(&node("rect { x: 0 y: 0 width: 100 height: 50 }")),
            Ok(Shape::rect(0.0, 0.0, 100.0, 50.0))
        );
        assert_eq!(
            shape_from_node(&node("polygon { vertex { x: 50 y: 0 } vertex { x: 100 y: 50 } vertex { x: 0 y: 50 } }")),
            Ok(Shape::polygon([(50.0, 0.0), (100.0, 50.0), (0.0, 50.0)]))
        );
    }

    #[test]
    fn legacy_ellipse_tag() {
        let shape = shape_from_node(&node("ellispe { x: 50 y: 50 r1: 20 r2: 10 }")).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Ellipse);
    }

    #[test]
    fn fill_rule_from_literal() {
        let src = "polygon { fill: nonzero vertex { x: 0 y: 0 } vertex { x: 9 y: 0 } vertex { x: 0 y: 9 } }";
        match shape_from_node(&node(src)).unwrap() {
            Shape::Polygon(p) => assert_eq!(p.fill_rule, FillRule::NonZero),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unknown_fill_rule_is_rejected() {
        let src = "polygon { fill: winding vertex { x: 0 y: 0 } }";
        assert_eq!(reason(shape_from_node(&node(src)).unwrap_err()), "unknown fill rule `winding`");
    }

    #[test]
    fn unknown_tag_is_unsupported() {
        assert_eq!(
            shape_from_node(&node("hexagon { x: 1 }")),
            Err(CompareError::UnsupportedShapeKind("hexagon".into()))
        );
    }

    #[test]
    fn missing_property_is_reported() {
        let err = shape_from_node(&node("circle { x: 1 y: 1 }")).unwrap_err();
        assert_eq!(reason(err), "missing `r` (line 1)");
    }

    #[test]
    fn non_numeric_property_is_reported() {
        let err = shape_from_node(&node("rect { x: 0 y: 0 width: wide height: 1 }")).unwrap_err();
        assert!(reason(err).contains("`width` must be a number"));
    }

    #[test]
    fn vertex_without_y_is_reported() {
        let src = "polygon { vertex { x: 0 y: 0 } vertex { x: 1 } vertex { x: 0 y: 1 } }";
        assert!(reason(shape_from_node(&node(src)).unwrap_err()).contains("missing `y`"));
    }

    #[test]
    fn ranges_are_left_to_validate() {
        let shape = shape_from_node(&node("circle { x: 0 y: 0 r: -3 }")).unwrap();
        assert!(shape.validate().is_err());
    }

    // ── ComparisonSource ──────────────────────────────────────────────────

    #[test]
    fn grid_node_sets_options() {
        let doc = parse_str("grid { width: 64 height: 32 } point { x: 1 y: 1 } point { x: 1 y: 1 }").unwrap();
        let source = ComparisonSource::from_document(&doc).unwrap();
        assert_eq!(source.options, CompareOptions::new(64, 32));
        assert_eq!(source.shapes.len(), 2);
    }

    #[test]
    fn missing_grid_uses_defaults() {
        let doc = parse_str("grid { width: 50 } point { x: 1 y: 1 }").unwrap();
        let source = ComparisonSource::from_document(&doc).unwrap();
        assert_eq!(source.options, CompareOptions::new(50, 200));

        let doc = parse_str("point { x: 1 y: 1 }").unwrap();
        assert_eq!(ComparisonSource::from_document(&doc).unwrap().options, CompareOptions::default());
    }

    #[test]
    fn bad_grid_is_rejected() {
        for src in ["grid { width: 0 }", "grid { width: 12.5 }", "grid { height: -4 }", "grid { width: big }"] {
            let doc = parse_str(src).unwrap();
            assert!(
                matches!(ComparisonSource::from_document(&doc), Err(CompareError::InvalidGridSize { .. })),
                "{}",
                src
            );
        }
    }

    // ── compare_source ────────────────────────────────────────────────────

    #[test]
    fn rect_half_from_source() {
        let src = "
            // reference, then probe
            rect { x: 0 y: 0 width: 100 height: 100 }
            rect { x: 0 y: 0 width: 100 height: 50 }
        ";
        assert_eq!(compare_source(src).unwrap(), 0.5);
    }

    #[test]
    fn parse_failure_keeps_root_cause() {
        let err = compare_source("circle { x: 1").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
        assert!(err.root_cause().downcast_ref::<ParseError>().is_some());
    }

    #[test]
    fn request_shape_is_checked() {
        let err = compare_source("point { x: 1 y: 1 }").unwrap_err();
        assert_eq!(
            err.root_cause().downcast_ref::<CompareError>(),
            Some(&CompareError::InvalidRequestShape { count: 1 })
        );
    }

    #[test]
    fn unsupported_kind_in_source() {
        let err = compare_source("star { x: 1 } point { x: 1 y: 1 }").unwrap_err();
        assert!(format!("{:#}", err).contains("unsupported shape kind"));
    }
}
