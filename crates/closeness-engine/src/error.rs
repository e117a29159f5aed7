use std::fmt;

use crate::registry::ShapeKind;

/// Failure of a shape comparison.
///
/// Every variant is detected synchronously before or during a single comparison;
/// no partial result is ever produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareError {
    /// Negative radius / size, too few polygon points, or a non-finite value.
    InvalidShapeParameters {
        kind: ShapeKind,
        reason: String,
    },
    /// A shape tag outside the closed registry.
    UnsupportedShapeKind(String),
    /// The two masks being compared differ in size.
    MaskDimensionMismatch {
        reference: (u32, u32),
        probe: (u32, u32),
    },
    /// The request did not contain exactly two shapes.
    InvalidRequestShape {
        count: usize,
    },
    /// Grid dimensions are zero or exceed [`MAX_GRID_DIMENSION`](crate::compare::MAX_GRID_DIMENSION).
    InvalidGridSize {
        width: u32,
        height: u32,
    },
}

impl CompareError {
    pub(crate) fn invalid(kind: ShapeKind, reason: impl Into<String>) -> Self {
        Self::InvalidShapeParameters { kind, reason: reason.into() }
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShapeParameters { kind, reason } => {
                write!(f, "invalid {} parameters: {}", kind.tag(), reason)
            }
            Self::UnsupportedShapeKind(tag) => write!(f, "unsupported shape kind {:?}", tag),
            Self::MaskDimensionMismatch { reference, probe } => write!(
                f,
                "mask dimensions differ: reference is {}x{}, probe is {}x{}",
                reference.0, reference.1, probe.0, probe.1
            ),
            Self::InvalidRequestShape { count } => {
                write!(f, "expected exactly 2 shapes to compare, got {}", count)
            }
            Self::InvalidGridSize { width, height } => {
                write!(f, "invalid grid size {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for CompareError {}
