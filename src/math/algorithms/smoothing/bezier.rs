// src/math/algorithms/smoothing/bezier.rs

//! Bézier-Glättung mit gleichmäßiger Abtastung nach Bogenlänge.
//!
//! Aus den Ankerpunkten wird ein geschlossener kubischer Bézier-Pfad gebaut
//! (Layout `[A0, C, C, A1, C, C, A2, ...]`), dessen Kontrollpunkte automatisch
//! aus den Nachbarankern gesetzt werden. Danach wird der Pfad Segment für
//! Segment abgelaufen und alle `spacing` Längeneinheiten ein Punkt ausgegeben.

use crate::math::{
    algorithms::smoothing::traits::Smoothing,
    error::{TrackError, TrackResult},
};
use bevy::math::Vec2;

/// Kleinster zulässiger Abstand des letzten Punkts zum ersten, relativ zu `spacing`.
const CLOSING_GAP_FRACTION: f32 = 0.01;
/// Untergrenze für `spacing`; darunter explodiert die Punktanzahl.
pub const MIN_SPACING: f32 = 0.01;
/// Obergrenze für `resolution`; die Schrittzahl pro Segment wächst linear mit ihr.
pub const MAX_RESOLUTION: f32 = 50.0;

/// Quadratische Bézier-Kurve nach de Casteljau.
#[inline]
pub fn evaluate_quadratic(a: Vec2, b: Vec2, c: Vec2, t: f32) -> Vec2 {
    let p0 = a.lerp(b, t);
    let p1 = b.lerp(c, t);
    p0.lerp(p1, t)
}

/// Kubische Bézier-Kurve als Interpolation zweier quadratischer Kurven.
#[inline]
pub fn evaluate_cubic(a: Vec2, b: Vec2, c: Vec2, d: Vec2, t: f32) -> Vec2 {
    let p0 = evaluate_quadratic(a, b, c, t);
    let p1 = evaluate_quadratic(b, c, d, t);
    p0.lerp(p1, t)
}

/// Geschlossener kubischer Bézier-Pfad.
///
/// Jeder dritte Eintrag von `points` ist ein Anker, dazwischen liegen je zwei
/// Kontrollpunkte. Das letzte Segment verbindet den letzten Anker mit `points[0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierPath {
    points: Vec<Vec2>,
}

impl BezierPath {
    /// Baut den Pfad durch alle `anchors` und schließt ihn.
    ///
    /// # Errors
    /// `InsufficientPoints`, wenn weniger als 2 Anker übergeben werden.
    pub fn closed(anchors: &[Vec2]) -> TrackResult<Self> {
        if anchors.len() < 2 {
            return Err(TrackError::InsufficientPoints {
                expected: 2,
                actual: anchors.len(),
            });
        }

        let mut path = Self {
            points: Vec::with_capacity(anchors.len() * 3),
        };
        path.add_first_segment(anchors[0], anchors[1]);
        for &anchor in &anchors[2..] {
            path.add_segment(anchor);
        }

        // Schließen: zwei gespiegelte Kontrollpunkte zwischen letztem und erstem Anker
        let n = path.points.len();
        let closing_in = path.points[n - 1] * 2.0 - path.points[n - 2];
        let closing_out = path.points[0] * 2.0 - path.points[1];
        path.points.push(closing_in);
        path.points.push(closing_out);
        Ok(path)
    }

    fn add_first_segment(&mut self, a: Vec2, b: Vec2) {
        let center = a.lerp(b, 0.5);
        let r = a.distance(center);
        self.points.push(a);
        self.points.push(center + Vec2::new(-1.0, 1.0) * 0.5 * r);
        self.points.push(center + Vec2::new(1.0, -1.0) * 0.5 * r);
        self.points.push(b);
    }

    fn add_segment(&mut self, anchor: Vec2) {
        let n = self.points.len();
        let reflected = self.points[n - 1] * 2.0 - self.points[n - 2];
        self.points.push(reflected);
        self.points.push(reflected.lerp(anchor, 0.5));
        self.points.push(anchor);
    }

    /// Alle Punkte im Layout `[A0, C, C, A1, ...]`.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn anchor_count(&self) -> usize {
        self.points.len() / 3
    }

    /// Bei einem geschlossenen Pfad gibt es so viele Segmente wie Anker.
    pub fn segment_count(&self) -> usize {
        self.anchor_count()
    }

    #[inline]
    fn loop_index(&self, i: isize) -> usize {
        i.rem_euclid(self.points.len() as isize) as usize
    }

    /// Die vier Punkte `[anchor, control, control, next anchor]` von Segment `i`.
    pub fn segment(&self, i: usize) -> [Vec2; 4] {
        let base = i * 3;
        [
            self.points[base],
            self.points[base + 1],
            self.points[base + 2],
            self.points[self.loop_index(base as isize + 3)],
        ]
    }

    pub fn segments(&self) -> impl Iterator<Item = [Vec2; 4]> + '_ {
        (0..self.segment_count()).map(|i| self.segment(i))
    }

    /// Setzt die Kontrollpunkte um den Anker bei `anchor_index` so, dass die
    /// Tangente die Winkelhalbierende zu den Nachbarankern ist.
    fn auto_set_anchor_controls(&mut self, anchor_index: usize) {
        let anchor = self.points[anchor_index];
        let idx = anchor_index as isize;

        let to_prev = self.points[self.loop_index(idx - 3)] - anchor;
        let to_next = self.points[self.loop_index(idx + 3)] - anchor;
        let dir = (to_prev.normalize_or_zero() - to_next.normalize_or_zero()).normalize_or_zero();
        let distances = [to_prev.length(), -to_next.length()];

        for (i, distance) in distances.iter().enumerate() {
            let control = self.loop_index(idx + i as isize * 2 - 1);
            self.points[control] = anchor + dir * *distance * 0.5;
        }
    }

    /// Setzt die Kontrollpunkte aller Anker automatisch.
    pub fn auto_set_all_control_points(&mut self) {
        for anchor_index in (0..self.points.len()).step_by(3) {
            self.auto_set_anchor_controls(anchor_index);
        }
    }

    /// Tastet den Pfad alle `spacing` Einheiten Bogenlänge ab.
    ///
    /// Pro Segment wird die Kurvenlänge als `Sehne + Kontrollnetz / 2` geschätzt
    /// und in `ceil(Länge * resolution * 10)` Schritte zerlegt. Der Überschuss
    /// über `spacing` wird über Schritt- und Segmentgrenzen hinweg übertragen.
    /// Der erste Ausgabepunkt ist der erste Anker.
    pub fn evenly_spaced_points(&self, spacing: f32, resolution: f32) -> TrackResult<Vec<Vec2>> {
        if !(spacing > 0.0) || !spacing.is_finite() {
            return Err(TrackError::invalid_argument(format!(
                "bezier spacing must be positive, got {spacing}"
            )));
        }
        if !(resolution > 0.0) || !resolution.is_finite() {
            return Err(TrackError::invalid_argument(format!(
                "bezier resolution must be positive, got {resolution}"
            )));
        }

        let mut evenly_spaced = vec![self.points[0]];
        let mut previous = self.points[0];
        let mut distance_since_last = 0.0_f32;

        for [a, b, c, d] in self.segments() {
            let control_net = a.distance(b) + b.distance(c) + c.distance(d);
            let estimated_length = a.distance(d) + control_net / 2.0;
            let divisions = ((estimated_length * resolution * 10.0).ceil() as usize).max(1);

            for k in 1..=divisions {
                let t = k as f32 / divisions as f32;
                let on_curve = evaluate_cubic(a, b, c, d, t);
                distance_since_last += previous.distance(on_curve);

                while distance_since_last >= spacing {
                    let overshoot = distance_since_last - spacing;
                    let point = on_curve + (previous - on_curve).normalize_or_zero() * overshoot;
                    evenly_spaced.push(point);
                    distance_since_last = overshoot;
                    previous = point;
                }
                previous = on_curve;
            }
        }

        // Ein Punkt fast auf dem Startpunkt würde eine Schlusskante der Länge ~0 erzeugen
        if evenly_spaced.len() > 1 {
            if let Some(last) = evenly_spaced.last() {
                if last.distance(evenly_spaced[0]) < spacing * CLOSING_GAP_FRACTION {
                    evenly_spaced.pop();
                }
            }
        }

        Ok(evenly_spaced)
    }
}

/// Bézier-Glätter mit Bogenlängen-Abtastung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSmoother {
    /// Abstand zwischen zwei Ausgabepunkten entlang der Kurve.
    pub spacing: f32,
    /// Schrittdichte beim Ablaufen der Kurve (Schritte pro Zehntel Längeneinheit).
    pub resolution: f32,
}

impl Default for BezierSmoother {
    fn default() -> Self {
        Self {
            spacing: 3.0,
            resolution: 1.0,
        }
    }
}

impl BezierSmoother {
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            ..Default::default()
        }
    }

    pub fn with_resolution(mut self, resolution: f32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Prüft `spacing` in `[MIN_SPACING, ∞)` und `resolution` in `(0, MAX_RESOLUTION]`.
    ///
    /// # Errors
    /// `InvalidArgument` für nicht-endliche oder außerhalb liegende Werte.
    pub fn validate(&self) -> TrackResult<()> {
        if !self.spacing.is_finite() || self.spacing < MIN_SPACING {
            return Err(TrackError::invalid_argument(format!(
                "bezier spacing must be finite and at least {MIN_SPACING}, got {}",
                self.spacing
            )));
        }
        if !self.resolution.is_finite() || !(self.resolution > 0.0) || self.resolution > MAX_RESOLUTION {
            return Err(TrackError::invalid_argument(format!(
                "bezier resolution must lie in (0, {MAX_RESOLUTION}], got {}",
                self.resolution
            )));
        }
        Ok(())
    }
}

impl Smoothing for BezierSmoother {
    fn smooth_closed(&self, points: &[Vec2]) -> TrackResult<Vec<Vec2>> {
        self.validate()?;
        let mut path = BezierPath::closed(points)?;
        path.auto_set_all_control_points();
        path.evenly_spaced_points(self.spacing, self.resolution)
    }

    fn name(&self) -> &'static str {
        "bezier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(size: f32) -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(size, 0.0),
            Vec2::new(size, size),
            Vec2::new(0.0, size),
        ]
    }

    #[test]
    fn test_cubic_endpoints() {
        let (a, b, c, d) = (Vec2::ZERO, Vec2::new(1.0, 2.0), Vec2::new(3.0, 2.0), Vec2::new(4.0, 0.0));
        assert_eq!(evaluate_cubic(a, b, c, d, 0.0), a);
        assert_relative_eq!(evaluate_cubic(a, b, c, d, 1.0).x, d.x, epsilon = 1e-5);
        assert_relative_eq!(evaluate_cubic(a, b, c, d, 0.5).x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(evaluate_quadratic(a, b, c, 0.5).x, 1.25, epsilon = 1e-5);
    }

    #[test]
    fn test_closed_path_layout() {
        let path = BezierPath::closed(&square(10.0)).unwrap();
        assert_eq!(path.points().len(), 12);
        assert_eq!(path.anchor_count(), 4);
        assert_eq!(path.segment_count(), 4);
        // Das letzte Segment endet wieder am ersten Anker
        let last = path.segment(3);
        assert_eq!(last[0], Vec2::new(0.0, 10.0));
        assert_eq!(last[3], Vec2::ZERO);
    }

    #[test]
    fn test_two_anchor_path() {
        let path = BezierPath::closed(&[Vec2::ZERO, Vec2::new(10.0, 0.0)]).unwrap();
        assert_eq!(path.points().len(), 6);
        assert_eq!(path.segment_count(), 2);
    }

    #[test]
    fn test_too_few_anchors() {
        let err = BezierPath::closed(&[Vec2::ZERO]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_auto_controls_are_symmetric_on_square() {
        let mut path = BezierPath::closed(&square(10.0)).unwrap();
        path.auto_set_all_control_points();
        let p = path.points();
        // Anker (10, 0): Nachbarn (0, 0) und (10, 10), Tangente entlang (-1, -1)/√2 bzw. (1, 1)/√2
        let anchor = p[3];
        assert_relative_eq!(p[2].distance(anchor), 5.0, epsilon = 1e-4);
        assert_relative_eq!(p[4].distance(anchor), 5.0, epsilon = 1e-4);
        let mid = (p[2] + p[4]) * 0.5;
        assert_relative_eq!(mid.x, anchor.x, epsilon = 1e-4);
        assert_relative_eq!(mid.y, anchor.y, epsilon = 1e-4);
    }

    #[test]
    fn test_evenly_spaced_points_close_the_loop() {
        let spacing = 3.0;
        let smoothed = BezierSmoother::new(spacing).smooth_closed(&square(40.0)).unwrap();
        assert!(smoothed.len() > 40);
        assert_eq!(smoothed[0], Vec2::ZERO);

        for pair in smoothed.windows(2) {
            assert!(pair[0].distance(pair[1]) <= spacing * 1.001);
        }
        let gap = smoothed[smoothed.len() - 1].distance(smoothed[0]);
        assert!(gap <= spacing * 1.02, "closing gap {gap}");
        assert!(gap >= spacing * CLOSING_GAP_FRACTION);
    }

    #[test]
    fn test_invalid_spacing_and_resolution() {
        let pts = square(10.0);
        assert!(BezierSmoother::new(0.0).smooth_closed(&pts).unwrap_err().is_invalid_argument());
        assert!(BezierSmoother::new(-1.0).smooth_closed(&pts).is_err());
        assert!(
            BezierSmoother::new(2.0)
                .with_resolution(0.0)
                .smooth_closed(&pts)
                .is_err()
        );
    }

    #[test]
    fn test_validate_bounds() {
        assert!(BezierSmoother::default().validate().is_ok());
        for smoother in [
            BezierSmoother::new(f32::INFINITY),
            BezierSmoother::new(f32::NAN),
            BezierSmoother::new(MIN_SPACING / 2.0),
            BezierSmoother::new(2.0).with_resolution(f32::INFINITY),
            BezierSmoother::new(2.0).with_resolution(MAX_RESOLUTION * 2.0),
        ] {
            assert!(smoother.validate().unwrap_err().is_invalid_argument(), "{smoother:?}");
        }
        assert!(BezierSmoother::new(MIN_SPACING).with_resolution(MAX_RESOLUTION).validate().is_ok());
    }
}
