//! Pixel grids that shapes are rasterized into.
//!
//! The rasterizer only talks to the [`Surface`] capability, so any backing store
//! that can mark and query pixels works. [`CoverageMask`] is the in-memory bitmap
//! used by comparisons.

mod coverage;
mod surface;

pub use coverage::CoverageMask;
pub use surface::Surface;
