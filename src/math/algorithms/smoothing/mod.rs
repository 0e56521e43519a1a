// src/math/algorithms/smoothing/mod.rs

pub mod bezier; // Bézier-Pfad mit Bogenlängen-Abtastung
pub mod chaikin; // Chaikin-Algorithmus
pub mod traits; // Enthält den Smoothing-Trait

pub use self::bezier::{BezierPath, BezierSmoother, evaluate_cubic, evaluate_quadratic};
pub use self::chaikin::ChaikinSmoother;
pub use self::traits::Smoothing;

use crate::math::error::{TrackError, TrackResult};
use bevy::math::Vec2;

/// Zur Laufzeit wählbare Glättungsstrategie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSmoother {
    Bezier(BezierSmoother),
    Chaikin(ChaikinSmoother),
    /// Reicht das Skelett unverändert durch.
    None,
}

impl PathSmoother {
    /// Prüft die Parameter der gewählten Strategie, ohne zu glätten.
    ///
    /// # Errors
    /// `InvalidArgument` für unbrauchbare Parameter.
    pub fn validate(&self) -> TrackResult<()> {
        match self {
            PathSmoother::Bezier(s) => s.validate(),
            PathSmoother::Chaikin(s) => s.validate(),
            PathSmoother::None => Ok(()),
        }
    }
}

impl Default for PathSmoother {
    fn default() -> Self {
        Self::Bezier(BezierSmoother::default())
    }
}

impl Smoothing for PathSmoother {
    fn smooth_closed(&self, points: &[Vec2]) -> TrackResult<Vec<Vec2>> {
        match self {
            PathSmoother::Bezier(s) => s.smooth_closed(points),
            PathSmoother::Chaikin(s) => s.smooth_closed(points),
            PathSmoother::None => {
                if points.is_empty() {
                    return Err(TrackError::InsufficientPoints {
                        expected: 1,
                        actual: 0,
                    });
                }
                Ok(points.to_vec())
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PathSmoother::Bezier(s) => s.name(),
            PathSmoother::Chaikin(s) => s.name(),
            PathSmoother::None => "none",
        }
    }

    fn supports_iterations(&self) -> bool {
        match self {
            PathSmoother::Bezier(s) => s.supports_iterations(),
            PathSmoother::Chaikin(s) => s.supports_iterations(),
            PathSmoother::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_passes_through() {
        let pts = vec![Vec2::ZERO, Vec2::X, Vec2::Y];
        assert_eq!(PathSmoother::None.smooth_closed(&pts).unwrap(), pts);
        assert!(PathSmoother::None.smooth_closed(&[]).is_err());
    }

    #[test]
    fn test_dispatch() {
        let pts = [Vec2::ZERO, Vec2::new(20.0, 0.0), Vec2::new(0.0, 20.0)];
        let chaikin = PathSmoother::Chaikin(ChaikinSmoother::new(2));
        assert_eq!(chaikin.smooth_closed(&pts).unwrap().len(), 12);
        assert!(chaikin.supports_iterations());
        assert_eq!(PathSmoother::default().name(), "bezier");
        assert!(PathSmoother::default().smooth_closed(&pts).unwrap().len() > 3);
    }
}
