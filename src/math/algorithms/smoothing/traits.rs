// src/math/algorithms/smoothing/traits.rs

use crate::math::error::TrackResult;
use bevy::math::Vec2;

/// Haupt-Trait für Algorithmen, die einen geschlossenen Linienzug glätten.
///
/// Eingabe und Ausgabe sind geschlossene Ringe: der letzte Punkt ist mit dem
/// ersten verbunden, ohne dass der erste Punkt am Ende wiederholt wird.
pub trait Smoothing {
    /// Glättet den geschlossenen Ring `points` und liefert einen dichteren Ring.
    ///
    /// # Errors
    /// `InvalidArgument` bzw. `InsufficientPoints`, wenn der Algorithmus mit der
    /// Eingabe oder seinen Parametern nicht arbeiten kann.
    fn smooth_closed(&self, points: &[Vec2]) -> TrackResult<Vec<Vec2>>;

    /// Kurzer Name für Logausgaben.
    fn name(&self) -> &'static str;

    /// Gibt an, ob der Algorithmus iterativ angewendet werden kann.
    ///
    /// Chaikin verdoppelt die Punktanzahl pro Iteration, Bézier tastet einmalig ab.
    fn supports_iterations(&self) -> bool {
        false
    }
}
