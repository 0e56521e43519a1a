// src/math/geometry/mesh/strip.rs

use crate::math::types::{Point2D, Point3D};
use bevy::math::Vec2;

/// Dreiecksnetz eines Bandes entlang eines geschlossenen Pfads.
///
/// Zwei Vertices pro Pfadpunkt. Die Bodenebene ist x/z, y ist die Höhe;
/// ein 2D-Pfadpunkt `(x, y)` liegt bei `(x, 0, y)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StripMesh {
    pub positions: Vec<Point3D>,
    pub uvs: Vec<Vec2>,
    /// Dreiecksliste, drei Indizes pro Dreieck.
    pub indices: Vec<u32>,
}

impl StripMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Projektion aller Vertices auf die Bodenebene (x, z).
    pub fn ground_positions(&self) -> Vec<Point2D> {
        self.positions.iter().map(|p| Point2D::new(p.x, p.z)).collect()
    }

    /// Dreht die Umlaufrichtung jedes Dreiecks um (Normale zeigt auf die Gegenseite).
    pub fn flip_winding(&mut self) {
        for triangle in self.indices.chunks_exact_mut(3) {
            triangle.swap(1, 2);
        }
    }

    /// Flächennormale von Dreieck `triangle` nach der Rechte-Hand-Regel.
    pub fn face_normal(&self, triangle: usize) -> Option<Point3D> {
        let base = triangle * 3;
        let [a, b, c] = [
            *self.indices.get(base)?,
            *self.indices.get(base + 1)?,
            *self.indices.get(base + 2)?,
        ]
        .map(|i| self.positions.get(i as usize).copied());
        let (a, b, c) = (a?, b?, c?);
        Some((b - a).cross(c - a).normalize_or_zero())
    }
}

/// Einheitstangenten eines geschlossenen Pfads.
///
/// Index 0 nutzt nur die Richtung zum Nachfolger, alle anderen die Summe aus
/// eingehender und ausgehender Kante. Entartete Stellen (doppelte Punkte)
/// übernehmen die vorige Tangente.
pub fn path_tangents(points: &[Point2D]) -> Vec<Point2D> {
    let n = points.len();
    let mut tangents = Vec::with_capacity(n);
    let mut fallback = Vec2::X;

    for i in 0..n {
        let p = points[i];
        let next = points[(i + 1) % n];
        let mut forward = next - p;
        if i > 0 {
            forward += p - points[i - 1];
        }
        let tangent = forward.try_normalize().unwrap_or(fallback);
        fallback = tangent;
        tangents.push(tangent);
    }
    tangents
}
