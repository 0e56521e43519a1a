// src/math/algorithms/smoothing/chaikin.rs

use crate::math::{
    algorithms::smoothing::traits::Smoothing,
    error::{TrackError, TrackResult},
};
use bevy::{log::warn, math::Vec2};

/// Obergrenze für Iterationen; die Punktanzahl verdoppelt sich pro Iteration.
pub const MAX_ITERATIONS: usize = 10;

/// Implementiert den Chaikin-Algorithmus (Corner Cutting) für geschlossene Ringe.
///
/// Jede Iteration ersetzt jeden Punkt `p` durch `lerp(prev, p, 1 - cut_ratio)` und
/// `lerp(p, next, cut_ratio)`, die Punktanzahl verdoppelt sich also.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaikinSmoother {
    /// Anzahl der anzuwendenden Glättungsiterationen.
    pub iterations: usize,
    /// Schnittverhältnis, Standard 0.25.
    pub cut_ratio: f32,
}

impl Default for ChaikinSmoother {
    fn default() -> Self {
        Self {
            iterations: 1,
            cut_ratio: 0.25,
        }
    }
}

impl ChaikinSmoother {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }

    /// Prüft `iterations` in `[1, MAX_ITERATIONS]` und `cut_ratio` in `(0, 0.5)`.
    ///
    /// # Errors
    /// `InvalidArgument` für Werte außerhalb dieser Bereiche.
    pub fn validate(&self) -> TrackResult<()> {
        if !(1..=MAX_ITERATIONS).contains(&self.iterations) {
            return Err(TrackError::invalid_argument(format!(
                "chaikin smoothing needs 1 to {MAX_ITERATIONS} iterations, got {}",
                self.iterations
            )));
        }
        if !(self.cut_ratio > 0.0 && self.cut_ratio < 0.5) {
            return Err(TrackError::invalid_argument(format!(
                "chaikin cut ratio must lie in (0, 0.5), got {}",
                self.cut_ratio
            )));
        }
        Ok(())
    }

    fn iteration(&self, points: &[Vec2]) -> Vec<Vec2> {
        let n = points.len();
        let mut refined = Vec::with_capacity(n * 2);
        for i in 0..n {
            let prev = points[(i + n - 1) % n];
            let p = points[i];
            let next = points[(i + 1) % n];
            refined.push(prev.lerp(p, 1.0 - self.cut_ratio));
            refined.push(p.lerp(next, self.cut_ratio));
        }
        refined
    }
}

impl Smoothing for ChaikinSmoother {
    fn smooth_closed(&self, points: &[Vec2]) -> TrackResult<Vec<Vec2>> {
        if points.is_empty() {
            return Err(TrackError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }
        self.validate()?;

        warn!(
            "Chaikin smoothing ({} iterations) tends to produce artefacts on sharp skeletons; the result still has to pass validation",
            self.iterations
        );

        let mut current = points.to_vec();
        for _ in 0..self.iterations {
            current = self.iteration(&current);
        }
        Ok(current)
    }

    fn name(&self) -> &'static str {
        "chaikin"
    }

    fn supports_iterations(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_doubles_per_iteration() {
        let triangle = [Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0)];
        for iterations in 1..=4 {
            let smoothed = ChaikinSmoother::new(iterations).smooth_closed(&triangle).unwrap();
            assert_eq!(smoothed.len(), (1 << iterations) * triangle.len());
        }
    }

    #[test]
    fn test_single_iteration_cut_points() {
        let square = [
            Vec2::ZERO,
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
        ];
        let smoothed = ChaikinSmoother::new(1).smooth_closed(&square).unwrap();
        // Punkt 0: lerp((0,4), (0,0), 0.75) und lerp((0,0), (4,0), 0.25)
        assert_relative_eq!(smoothed[0].y, 1.0);
        assert_relative_eq!(smoothed[0].x, 0.0);
        assert_relative_eq!(smoothed[1].x, 1.0);
        assert_relative_eq!(smoothed[1].y, 0.0);
    }

    #[test]
    fn test_single_point_passes() {
        let smoothed = ChaikinSmoother::new(2).smooth_closed(&[Vec2::ONE]).unwrap();
        assert_eq!(smoothed, vec![Vec2::ONE; 4]);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(ChaikinSmoother::new(0).smooth_closed(&[Vec2::ONE]).is_err());
        assert!(ChaikinSmoother::new(MAX_ITERATIONS + 1).validate().unwrap_err().is_invalid_argument());
        assert!(ChaikinSmoother::new(MAX_ITERATIONS).validate().is_ok());
        assert!(ChaikinSmoother::new(1).smooth_closed(&[]).unwrap_err().is_invalid_argument());
    }
}
