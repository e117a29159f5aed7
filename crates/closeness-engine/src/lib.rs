//! Closeness engine crate.
//!
//! Scores how closely two 2D shapes match by rasterizing both onto the same pixel
//! grid and measuring which fraction of the first (reference) shape's pixels the
//! second (probe) shape also covers.
//!
//! ```rust
//! use closeness_engine::{compare_shapes, CompareOptions, Shape};
//!
//! let whole = Shape::rect(0.0, 0.0, 100.0, 100.0);
//! let half = Shape::rect(0.0, 0.0, 100.0, 50.0);
//! let ratio = compare_shapes(&[whole, half], &CompareOptions::default()).unwrap();
//! assert_eq!(ratio, 0.5);
//! ```

pub mod compare;
pub mod coords;
pub mod error;
pub mod literal;
pub mod logging;
pub mod mask;
pub mod overlap;
pub mod registry;
pub mod shape;

mod raster;

pub use compare::{compare_pair, compare_shapes, compare_shapes_detailed, CompareOptions};
pub use error::CompareError;
pub use literal::{compare_source, shape_from_node, ComparisonSource};
pub use overlap::OverlapCounts;
pub use registry::{supported_kinds, ShapeKind};
pub use shape::{FillRule, Shape};

#[cfg(test)]
mod thread_tests {
    use super::*;
    use crate::mask::CoverageMask;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_sync() {
        assert_send_sync::<Shape>();
        assert_send_sync::<CoverageMask>();
        assert_send_sync::<CompareOptions>();
        assert_send_sync::<CompareError>();
    }

    #[test]
    fn concurrent_comparisons_agree() {
        let reference = Shape::circle(100.0, 100.0, 60.0);
        let probe = Shape::ellipse(100.0, 100.0, 60.0, 30.0);
        let expected = compare_shapes(&[reference.clone(), probe.clone()], &CompareOptions::default()).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| compare_shapes(&[reference.clone(), probe.clone()], &CompareOptions::default()))
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), Ok(expected));
            }
        });
    }
}
