//! Overlap accounting between two coverage masks.
//!
//! The ratio is deliberately asymmetric: it answers "what fraction of the
//! reference footprint is also covered by the probe". Swapping the masks changes
//! the result whenever one footprint is not contained in the other.

use crate::error::CompareError;
use crate::mask::CoverageMask;

/// Pixel counts gathered in one pass over a reference and a probe mask.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct OverlapCounts {
    /// Pixels covered by the reference mask.
    pub reference: u64,
    /// Pixels covered by the probe mask.
    pub probe: u64,
    /// Pixels covered by both.
    pub intersection: u64,
}

impl OverlapCounts {
    /// `intersection / reference`, or `0.0` when the reference covers nothing.
    ///
    /// Always in `[0, 1]`.
    #[inline]
    pub fn ratio(&self) -> f64 {
        if self.reference == 0 {
            0.0
        } else {
            self.intersection as f64 / self.reference as f64
        }
    }
}

/// Counts reference, probe and shared pixels in a single scan.
///
/// Fails with [`CompareError::MaskDimensionMismatch`] if the masks differ in size.
pub fn count_overlap(
    reference: &CoverageMask,
    probe: &CoverageMask,
) -> Result<OverlapCounts, CompareError> {
    if reference.dimensions() != probe.dimensions() {
        return Err(CompareError::MaskDimensionMismatch {
            reference: reference.dimensions(),
            probe: probe.dimensions(),
        });
    }

    let mut counts = OverlapCounts::default();
    for (&a, &b) in reference.words().iter().zip(probe.words()) {
        counts.reference += u64::from(a.count_ones());
        counts.probe += u64::from(b.count_ones());
        counts.intersection += u64::from((a & b).count_ones());
    }
    Ok(counts)
}

/// Fraction of the reference mask's covered pixels that the probe also covers.
pub fn overlap_ratio(reference: &CoverageMask, probe: &CoverageMask) -> Result<f64, CompareError> {
    count_overlap(reference, probe).map(|counts| counts.ratio())
}
