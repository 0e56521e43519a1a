// src/math/point_distribution/random_points.rs

//! Uniformly scattered point sets inside an axis-aligned rectangle.
//!
//! Points are drawn on the integer lattice `[0, range_x) × [0, range_y)`,
//! so duplicates are possible and are removed before the set is returned.
//! The returned set may therefore be shorter than the requested count.

use crate::math::{
    error::{TrackError, TrackResult},
    types::Point2D,
};
use rand::Rng;
use std::collections::HashSet;

/// Smallest point count that can enclose an area.
pub const MIN_POINT_COUNT: usize = 3;

/// Rectangle the random anchor points are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointSetBounds {
    range_x: u32,
    range_y: u32,
}

impl PointSetBounds {
    /// # Errors
    /// `InvalidArgument` if either range is smaller than 1.
    pub fn new(range_x: u32, range_y: u32) -> TrackResult<Self> {
        if range_x < 1 || range_y < 1 {
            return Err(TrackError::invalid_argument(format!(
                "point ranges must be at least 1, got {range_x} x {range_y}"
            )));
        }
        Ok(Self { range_x, range_y })
    }
}

/// Draws `count` lattice points inside `bounds` and removes duplicates,
/// keeping the first occurrence of each point.
///
/// # Errors
/// `InsufficientPoints` if `count < 3`.
pub fn random_point_set<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: PointSetBounds,
    count: usize,
) -> TrackResult<Vec<Point2D>> {
    if count < MIN_POINT_COUNT {
        return Err(TrackError::InsufficientPoints {
            expected: MIN_POINT_COUNT,
            actual: count,
        });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.random_range(0..bounds.range_x);
        let y = rng.random_range(0..bounds.range_y);
        if seen.insert((x, y)) {
            points.push(Point2D::new(x as f32, y as f32));
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_points_inside_bounds_and_unique() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = PointSetBounds::new(10, 20).unwrap();
        let points = random_point_set(&mut rng, bounds, 50).unwrap();

        assert!(!points.is_empty() && points.len() <= 50);
        for (i, p) in points.iter().enumerate() {
            assert!(p.x >= 0.0 && p.x < 10.0);
            assert!(p.y >= 0.0 && p.y < 20.0);
            assert!(points[i + 1..].iter().all(|q| q != p));
        }
    }

    #[test]
    fn test_duplicates_shrink_the_set() {
        // Ein 1x1-Raster kann nur einen einzigen Punkt erzeugen.
        let mut rng = StdRng::seed_from_u64(5);
        let bounds = PointSetBounds::new(1, 1).unwrap();
        let points = random_point_set(&mut rng, bounds, 8).unwrap();
        assert_eq!(points, vec![Point2D::ZERO]);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(PointSetBounds::new(0, 10).unwrap_err().is_invalid_argument());
        assert!(PointSetBounds::new(10, 0).unwrap_err().is_invalid_argument());

        let mut rng = StdRng::seed_from_u64(5);
        let bounds = PointSetBounds::new(100, 100).unwrap();
        let err = random_point_set(&mut rng, bounds, 2).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
