// src/math/geometry/polygon/distortion.rs

//! Konkave Verzerrung einer konvexen Hülle.
//!
//! Jede Ecke wird mit Wahrscheinlichkeit `probability` in Richtung des
//! Schwerpunkts gezogen. Der Zielpunkt ist `lerp(centroid, vertex, t)`, wobei
//! `t` aus einer auf `[0, 1]` abgeschnittenen Normalverteilung stammt.
//! Da `t <= 1` gilt, entfernt sich keine Ecke weiter vom Schwerpunkt als vorher.

use crate::math::{
    error::{TrackError, TrackResult},
    probability::sample_truncated_normal,
    types::Point2D,
    utils::simple_geometry::centroid,
};
use rand::Rng;

/// Zieht zufällig gewählte Hüllenecken zum Schwerpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcaveDistorter {
    /// Wahrscheinlichkeit pro Ecke, verschoben zu werden. Liegt in `[0, 1]`.
    probability: f32,
    /// Erwartungswert der Interpolationsgewichte.
    mean: f32,
    /// Standardabweichung der Interpolationsgewichte.
    std_dev: f32,
}

impl Default for ConcaveDistorter {
    /// Wahrscheinlichkeit 0.5, N(0.5, 1) abgeschnitten auf `[0, 1]`.
    fn default() -> Self {
        Self {
            probability: 0.5,
            mean: 0.5,
            std_dev: 1.0,
        }
    }
}

impl ConcaveDistorter {
    /// # Errors
    /// `InvalidArgument`, wenn `probability` nicht in `[0, 1]` liegt.
    pub fn new(probability: f32) -> TrackResult<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(TrackError::invalid_argument(format!(
                "concavity probability must lie in [0, 1], got {probability}"
            )));
        }
        Ok(Self {
            probability,
            ..Default::default()
        })
    }

    /// Setzt die Parameter der Normalverteilung für die Gewichte.
    ///
    /// # Errors
    /// `InvalidArgument` bei nicht-endlichem Mittelwert oder `std_dev <= 0`.
    pub fn with_gaussian(mut self, mean: f32, std_dev: f32) -> TrackResult<Self> {
        if !mean.is_finite() || !(std_dev > 0.0) {
            return Err(TrackError::invalid_argument(format!(
                "gaussian needs a finite mean and std_dev > 0, got mean {mean}, std_dev {std_dev}"
            )));
        }
        self.mean = mean;
        self.std_dev = std_dev;
        Ok(self)
    }

    /// Verzerrt die Hülle. Länge und Reihenfolge bleiben erhalten.
    pub fn distort<R: Rng + ?Sized>(&self, rng: &mut R, hull: &[Point2D]) -> TrackResult<Vec<Point2D>> {
        let Some(center) = centroid(hull) else {
            return Ok(Vec::new());
        };

        hull.iter()
            .map(|&vertex| {
                // `random_bool` verlangt p in [0, 1], das sichert `new` zu.
                if rng.random_bool(f64::from(self.probability)) {
                    let t = sample_truncated_normal(rng, self.mean, self.std_dev, 0.0, 1.0)?;
                    Ok(center.lerp(vertex, t))
                } else {
                    Ok(vertex)
                }
            })
            .collect()
    }
}

/// Kurzform für `ConcaveDistorter::new(probability)?.distort(rng, hull)`.
pub fn distort_concave<R: Rng + ?Sized>(
    rng: &mut R,
    hull: &[Point2D],
    probability: f32,
) -> TrackResult<Vec<Point2D>> {
    ConcaveDistorter::new(probability)?.distort(rng, hull)
}
