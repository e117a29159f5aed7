//! Comparison entry point.
//!
//! Pipeline for one request:
//! 1. check the request holds exactly two shapes and the grid size is sane
//! 2. validate both shapes
//! 3. rasterize the reference and the probe into two fresh masks of the same size
//! 4. count reference, probe and shared pixels in one scan
//!
//! Nothing is retained between calls. Separate calls may run on separate threads.

use crate::error::CompareError;
use crate::mask::CoverageMask;
use crate::overlap::{count_overlap, OverlapCounts};
use crate::registry;
use crate::shape::Shape;

/// Default grid width and height, in pixels.
pub const DEFAULT_GRID_SIZE: u32 = 200;

/// Largest accepted grid width or height, in pixels.
///
/// Bounds the memory a single comparison can allocate (two masks of at most
/// `8192 × 8192` bits, 8 MiB each).
pub const MAX_GRID_DIMENSION: u32 = 8192;

/// Grid configuration for a comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
        }
    }
}

impl CompareOptions {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Fails with [`CompareError::InvalidGridSize`] unless both dimensions are in
    /// `1..=MAX_GRID_DIMENSION`.
    pub fn validate(&self) -> Result<(), CompareError> {
        let ok = |d: u32| (1..=MAX_GRID_DIMENSION).contains(&d);
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(CompareError::InvalidGridSize { width: self.width, height: self.height })
        }
    }

    fn mask(&self) -> CoverageMask {
        CoverageMask::new(self.width, self.height)
    }
}

/// Scores how much of `shapes[0]` (the reference) is covered by `shapes[1]` (the probe).
///
/// Returns a value in `[0, 1]`: `1.0` when every reference pixel is also a probe
/// pixel, `0.0` when they share none or the reference covers no pixel at all.
///
/// # Errors
/// - [`CompareError::InvalidRequestShape`] unless exactly two shapes are given
/// - [`CompareError::InvalidGridSize`] for zero or oversized grids
/// - [`CompareError::InvalidShapeParameters`] if either shape is invalid
pub fn compare_shapes(shapes: &[Shape], options: &CompareOptions) -> Result<f64, CompareError> {
    compare_shapes_detailed(shapes, options).map(|counts| counts.ratio())
}

/// Same pipeline as [`compare_shapes`], returning the raw pixel counts.
pub fn compare_shapes_detailed(
    shapes: &[Shape],
    options: &CompareOptions,
) -> Result<OverlapCounts, CompareError> {
    match shapes {
        [reference, probe] => compare_pair(reference, probe, options),
        _ => Err(CompareError::InvalidRequestShape { count: shapes.len() }),
    }
}

/// Typed two-shape form of [`compare_shapes_detailed`].
pub fn compare_pair(
    reference: &Shape,
    probe: &Shape,
    options: &CompareOptions,
) -> Result<OverlapCounts, CompareError> {
    options.validate()?;
    reference.validate()?;
    probe.validate()?;

    let mut reference_mask = options.mask();
    registry::rasterize(reference, &mut reference_mask);

    let mut probe_mask = options.mask();
    registry::rasterize(probe, &mut probe_mask);

    let counts = count_overlap(&reference_mask, &probe_mask)?;

    if counts.reference == 0 {
        log::warn!(
            "reference {} (area {:.2}) covers no pixel of the {}x{} grid; score is 0",
            reference.kind(),
            reference.area(),
            options.width,
            options.height
        );
    } else if !reference.kind().is_filled() {
        log::debug!("reference {} is a path; score measures path coverage", reference.kind());
    }

    log::debug!(
        "compared {} against {} on {}x{}: reference={} probe={} shared={} ratio={:.4}",
        reference.kind(),
        probe.kind(),
        options.width,
        options.height,
        counts.reference,
        counts.probe,
        counts.intersection,
        counts.ratio()
    );

    Ok(counts)
}
