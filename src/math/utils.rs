// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const EPSILON_SQUARED: f32 = EPSILON * EPSILON; // Für Vergleiche mit Längen
    /// Toleranz für Orientierungstests auf Gitterkoordinaten
    pub const ORIENTATION_TOLERANCE: f32 = 1e-5;
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use bevy::math::Vec2;

    /// 2D-Kreuzprodukt der Vektoren (a - origin) und (b - origin).
    /// - Ergebnis > 0: b liegt gegen den Uhrzeigersinn (links) von a
    /// - Ergebnis < 0: b liegt im Uhrzeigersinn (rechts) von a
    #[inline]
    pub fn cross(origin: Vec2, a: Vec2, b: Vec2) -> f32 {
        (a.x - origin.x) * (b.y - origin.y) - (a.y - origin.y) * (b.x - origin.x)
    }

    /// Schwerpunkt der Punktmenge (arithmetisches Mittel)
    pub fn centroid(points: &[Vec2]) -> Option<Vec2> {
        if points.is_empty() {
            return None;
        }
        let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + *p);
        Some(sum / points.len() as f32)
    }

    /// Rechtsseitige Normale: perp(v) = (v.y, -v.x)
    #[inline]
    pub fn right_perpendicular(v: Vec2) -> Vec2 {
        Vec2::new(v.y, -v.x)
    }
}
