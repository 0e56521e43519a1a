// src/math/geometry/polygon/properties.rs

//! Eigenschaften geschlossener Punktringe (letzter Punkt verbindet zum ersten,
//! ohne dupliziertes Schlusselement).

use crate::math::utils::{constants, simple_geometry::cross};
use bevy::math::Vec2;

/// Gibt die Orientierung eines Polygons an.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear, // Alle Punkte liegen auf einer Linie
}

/// Vorzeichenbehaftete Fläche nach der Shoelace-Formel.
/// Positiv für Ringe gegen den Uhrzeigersinn.
pub fn signed_area(ring: &[Vec2]) -> f32 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let twice_area: f32 = (0..n)
        .map(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice_area * 0.5
}

/// Bestimmt die Orientierung über das Vorzeichen der Fläche.
pub fn orientation(ring: &[Vec2]) -> Orientation {
    let area = signed_area(ring);
    if area > constants::EPSILON {
        Orientation::CounterClockwise
    } else if area < -constants::EPSILON {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Umfang des geschlossenen Rings inklusive der Schlusskante.
pub fn perimeter(ring: &[Vec2]) -> f32 {
    let n = ring.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|i| ring[i].distance(ring[(i + 1) % n])).sum()
}

/// Prüft, ob `point` innerhalb oder auf dem Rand eines konvexen Rings
/// gegen den Uhrzeigersinn liegt.
pub fn contains_point(convex_ccw_ring: &[Vec2], point: Vec2) -> bool {
    let n = convex_ccw_ring.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| {
        let a = convex_ccw_ring[i];
        let b = convex_ccw_ring[(i + 1) % n];
        cross(a, b, point) >= -constants::ORIENTATION_TOLERANCE * a.distance(b).max(1.0)
    })
}

/// Prüft, ob der Ring konvex ist (kollineare Ecken erlaubt).
pub fn is_convex(ring: &[Vec2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0_f32;
    for i in 0..n {
        let turn = cross(ring[i], ring[(i + 1) % n], ring[(i + 2) % n]);
        if turn.abs() <= constants::ORIENTATION_TOLERANCE {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    true
}
