//! Normalverteilte Zufallswerte nach Marsaglias Polarmethode.
//!
//! Die Polarmethode zieht Punktpaare gleichverteilt im Quadrat `[-1, 1]²`
//! und verwirft alle, die nicht im offenen Einheitskreis liegen. Aus einem
//! akzeptierten Paar entsteht ein standardnormalverteilter Wert.

use crate::math::error::{TrackError, TrackResult};
use rand::Rng;

/// Obergrenze für Verwerfungsschleifen bei abgeschnittenen Verteilungen.
const MAX_TRUNCATION_DRAWS: usize = 10_000;

/// Zieht einen Wert aus N(`mean`, `std_dev`²).
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f32, std_dev: f32) -> f32 {
    let (v1, s) = loop {
        let v1 = 2.0 * rng.random::<f32>() - 1.0;
        let v2 = 2.0 * rng.random::<f32>() - 1.0;
        let s = v1 * v1 + v2 * v2;
        if s < 1.0 && s > 0.0 {
            break (v1, s);
        }
    };

    let factor = (-2.0 * s.ln() / s).sqrt();
    std_dev * v1 * factor + mean
}

/// Zieht so lange aus N(`mean`, `std_dev`²), bis der Wert in `[min, max]` liegt.
///
/// # Errors
/// `InvalidArgument` bei leerem Intervall, nicht-positiver Standardabweichung
/// oder wenn nach `MAX_TRUNCATION_DRAWS` Versuchen kein Wert im Intervall lag
/// (Intervall weit außerhalb der Verteilungsmasse).
pub fn sample_truncated_normal<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f32,
    std_dev: f32,
    min: f32,
    max: f32,
) -> TrackResult<f32> {
    if !(min <= max) {
        return Err(TrackError::invalid_argument(format!(
            "truncation interval [{min}, {max}] is empty"
        )));
    }
    if !(std_dev > 0.0) || !mean.is_finite() {
        return Err(TrackError::invalid_argument(format!(
            "normal distribution needs a finite mean and std_dev > 0, got mean {mean}, std_dev {std_dev}"
        )));
    }

    for _ in 0..MAX_TRUNCATION_DRAWS {
        let value = sample_normal(rng, mean, std_dev);
        if (min..=max).contains(&value) {
            return Ok(value);
        }
    }

    Err(TrackError::invalid_argument(format!(
        "no sample of N({mean}, {std_dev}) fell into [{min}, {max}] after {MAX_TRUNCATION_DRAWS} draws"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_normal_sample_statistics() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 20_000;
        let samples: Vec<f32> = (0..n).map(|_| sample_normal(&mut rng, 0.5, 1.0)).collect();

        let mean = samples.iter().sum::<f32>() / n as f32;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f32>() / n as f32;

        assert!((mean - 0.5).abs() < 0.05, "mean was {mean}");
        assert!((variance.sqrt() - 1.0).abs() < 0.05, "std_dev was {}", variance.sqrt());
    }

    #[test]
    fn test_truncated_samples_stay_in_interval() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let t = sample_truncated_normal(&mut rng, 0.5, 1.0, 0.0, 1.0).unwrap();
            assert!((0.0..=1.0).contains(&t));
        }
    }

    #[test]
    fn test_truncated_rejects_bad_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_truncated_normal(&mut rng, 0.0, 1.0, 1.0, 0.0).is_err());
        assert!(sample_truncated_normal(&mut rng, 0.0, 0.0, 0.0, 1.0).is_err());
        assert!(sample_truncated_normal(&mut rng, 0.0, 1.0, 1000.0, 1001.0).is_err());
    }
}
