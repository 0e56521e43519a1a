// src/math/algorithms/convex_hull.rs

//! # Convex Hull (Gift Wrapping)
//!
//! Computes the convex hull of a 2D point set with Jarvis March.
//!
//! The walk starts at the point with the smallest x coordinate (ties are broken
//! by array order) and repeatedly picks the candidate for which no other point
//! lies clockwise of the direction `current -> candidate`. The resulting hull is
//! counter-clockwise (positive signed area) and does not repeat its first vertex.

use crate::math::{
    error::{TrackError, TrackResult},
    types::Point2D,
    utils::{constants, simple_geometry::cross},
};
use bevy::log::warn;

/// Gift-wrapping convex hull builder.
#[derive(Debug, Clone, Copy)]
pub struct ConvexHullBuilder {
    /// Tolerance for the orientation test. Turns within `±tolerance` count as collinear.
    tolerance: f32,
}

impl Default for ConvexHullBuilder {
    /// Default tolerance: `constants::ORIENTATION_TOLERANCE`.
    fn default() -> Self {
        Self {
            tolerance: constants::ORIENTATION_TOLERANCE,
        }
    }
}

impl ConvexHullBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance for the orientation test. Must be non-negative.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Computes the convex hull of `points`.
    ///
    /// # Returns
    /// The hull vertices in counter-clockwise order, at least 3 of them.
    ///
    /// # Errors
    /// - `InsufficientPoints` if fewer than 3 points are given.
    /// - `DegenerateHull` if the points enclose no area (all collinear).
    pub fn build(&self, points: &[Point2D]) -> TrackResult<Vec<Point2D>> {
        let n = points.len();
        if n < 3 {
            return Err(TrackError::InsufficientPoints {
                expected: 3,
                actual: n,
            });
        }

        // Leftmost point; the first one in array order wins ties.
        let mut start = 0;
        for (i, p) in points.iter().enumerate().skip(1) {
            if p.x < points[start].x {
                start = i;
            }
        }

        let mut hull_indices = vec![start];
        let mut current = start;
        let mut closed = false;

        for _ in 0..n {
            let next = self.next_hull_index(points, current);

            if next == start {
                closed = true;
                break;
            }
            // A start point on a collinear boundary run is never revisited, the walk
            // comes back to another hull vertex instead. Cut the hull to that cycle.
            if let Some(pos) = hull_indices.iter().position(|&idx| idx == next) {
                hull_indices.drain(..pos);
                closed = true;
                break;
            }

            hull_indices.push(next);
            current = next;
        }

        if !closed {
            warn!(
                "Gift wrapping hit its iteration bound of {} without closing, returning {} vertices",
                n,
                hull_indices.len()
            );
        }

        if hull_indices.len() < 3 {
            return Err(TrackError::DegenerateHull {
                vertices: hull_indices.len(),
            });
        }

        Ok(hull_indices.into_iter().map(|idx| points[idx]).collect())
    }

    /// One gift-wrapping step: the index of the hull vertex following `current`.
    fn next_hull_index(&self, points: &[Point2D], current: usize) -> usize {
        let n = points.len();
        let origin = points[current];

        // Pick a point (make sure it is different from the current hull point)
        let mut best = (current + 1) % n;
        for i in 0..n {
            if i == current || i == best {
                continue;
            }
            if self.is_better_candidate(origin, points[best], points[i]) {
                best = i;
            }
        }

        // The single scan is only a total order when every point lies in an open
        // half-plane around `origin`. On a collinear boundary run it is not, so keep
        // rotating clockwise while some point is still strictly right of the edge.
        for _ in 0..n {
            let right_of_edge = points
                .iter()
                .position(|&p| cross(origin, points[best], p) < -self.tolerance);
            match right_of_edge {
                Some(i) => best = i,
                None => break,
            }
        }
        best
    }

    /// `true` if `candidate` turns further clockwise than `best` (seen from `origin`),
    /// or is collinear with it in the same direction but farther away.
    #[inline]
    fn is_better_candidate(&self, origin: Point2D, best: Point2D, candidate: Point2D) -> bool {
        let turn = cross(origin, best, candidate);
        if turn < -self.tolerance {
            return true;
        }
        if turn.abs() <= self.tolerance {
            let same_direction = (best - origin).dot(candidate - origin) > 0.0
                || origin.distance_squared(best) <= constants::EPSILON_SQUARED;
            return same_direction
                && origin.distance_squared(candidate) > origin.distance_squared(best);
        }
        false
    }
}

/// Convenience wrapper around `ConvexHullBuilder::default().build(points)`.
pub fn convex_hull(points: &[Point2D]) -> TrackResult<Vec<Point2D>> {
    ConvexHullBuilder::default().build(points)
}
