use crate::mask::Surface;
use crate::shape::Circle;

use super::{fill_where, point};

/// Covers every pixel whose center is within `radius` of the circle's center.
///
/// A zero radius collapses to the center point.
pub(crate) fn rasterize<S: Surface + ?Sized>(circle: &Circle, surface: &mut S) {
    if circle.radius == 0.0 {
        point::rasterize(circle.center, surface);
        return;
    }

    let r2 = circle.radius * circle.radius;
    fill_where(surface, circle.bounds(), |c| c.distance_squared(circle.center) <= r2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::mask::CoverageMask;

    fn draw(x: f32, y: f32, r: f32, size: u32) -> CoverageMask {
        let mut mask = CoverageMask::new(size, size);
        rasterize(&Circle::new(Vec2::new(x, y), r), &mut mask);
        mask
    }

    #[test]
    fn pixel_count_tracks_area() {
        let circle = Circle::new(Vec2::new(100.0, 100.0), 60.0);
        let mask = draw(100.0, 100.0, 60.0, 200);
        let area = circle.area();
        let count = mask.covered_count() as f32;
        assert!((count - area).abs() / area < 0.01, "count {} area {}", count, area);
    }

    #[test]
    fn radius_is_inclusive() {
        // Pixel (2, 0) has center (2.5, 0.5), exactly 2 away from (0.5, 0.5).
        let mask = draw(0.5, 0.5, 2.0, 10);
        assert!(mask.is_covered(2, 0));
        assert!(!mask.is_covered(3, 0));
        assert!(!mask.is_covered(2, 1));
    }

    #[test]
    fn small_circle_on_a_center_is_a_plus() {
        let mask = draw(5.5, 5.5, 1.0, 10);
        assert_eq!(
            mask.iter_covered().collect::<Vec<_>>(),
            vec![(5, 4), (4, 5), (5, 5), (6, 5), (5, 6)]
        );
    }

    #[test]
    fn zero_radius_is_center_point() {
        let mask = draw(50.0, 50.0, 0.0, 200);
        assert_eq!(mask.iter_covered().collect::<Vec<_>>(), vec![(50, 50)]);
    }

    #[test]
    fn clipped_at_grid_edge() {
        // A quarter of the disk lies on the grid.
        let full = draw(100.0, 100.0, 20.0, 200).covered_count();
        let quarter = draw(0.0, 0.0, 20.0, 200).covered_count();
        let ratio = quarter as f32 / full as f32;
        assert!((ratio - 0.25).abs() < 0.02, "ratio {}", ratio);
    }

    #[test]
    fn far_outside_draws_nothing() {
        assert!(draw(-500.0, 40.0, 100.0, 200).is_empty());
    }
}
