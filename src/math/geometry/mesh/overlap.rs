// src/math/geometry/mesh/overlap.rs

//! Erkennung von Selbstüberschneidungen eines Bandnetzes.
//!
//! Alle Dreieckspaare werden in der Bodenebene verglichen. Nachbarn (gemeinsamer
//! Vertex-Index oder deckungsgleiche Vertex-Position) werden übersprungen, der
//! Rest zuerst per Bounding Box und danach mit dem Trennkantentest geprüft.

use super::strip::StripMesh;
use crate::math::{
    types::{Bounds2D, Point2D},
    utils::{constants, simple_geometry::cross},
};
use bevy::log::{trace, warn};

/// Dreieck in der Ebene mit den ursprünglichen Vertex-Indizes.
#[derive(Debug, Clone, Copy)]
struct FlatTriangle {
    indices: [u32; 3],
    corners: [Point2D; 3],
    bounds: Bounds2D,
}

impl FlatTriangle {
    fn shares_vertex_with(&self, other: &FlatTriangle) -> bool {
        self.indices.iter().any(|i| other.indices.contains(i))
            || self.corners.iter().any(|a| {
                other
                    .corners
                    .iter()
                    .any(|b| a.distance_squared(*b) <= constants::EPSILON_SQUARED)
            })
    }

    /// `true`, wenn eine Kante dieses Dreiecks `other` vollständig abtrennt.
    fn has_separating_edge(&self, other: &FlatTriangle) -> bool {
        (0..3).any(|i| {
            let a = self.corners[(i + 1) % 3];
            let b = self.corners[(i + 2) % 3];
            let own = cross(a, b, self.corners[i]);
            if own.abs() <= constants::ORIENTATION_TOLERANCE {
                return false;
            }
            let side = own.signum();
            other
                .corners
                .iter()
                .all(|&q| side * cross(a, b, q) <= constants::ORIENTATION_TOLERANCE)
        })
    }

    fn overlaps(&self, other: &FlatTriangle) -> bool {
        self.bounds.intersects(&other.bounds)
            && !self.has_separating_edge(other)
            && !other.has_separating_edge(self)
    }
}

fn flatten(vertices: &[Point2D], indices: &[u32]) -> Vec<FlatTriangle> {
    let mut triangles = Vec::with_capacity(indices.len() / 3);
    for (t, chunk) in indices.chunks_exact(3).enumerate() {
        let indices = [chunk[0], chunk[1], chunk[2]];
        let Some(corners) = indices
            .iter()
            .map(|&i| vertices.get(i as usize).copied())
            .collect::<Option<Vec<_>>>()
        else {
            warn!("Triangle {t} references a vertex outside the mesh, skipping it");
            continue;
        };
        let corners = [corners[0], corners[1], corners[2]];
        let Some(bounds) = Bounds2D::from_points_iter(corners) else {
            continue;
        };
        triangles.push(FlatTriangle {
            indices,
            corners,
            bounds,
        });
    }
    triangles
}

/// Findet überlappende, nicht benachbarte Dreiecke eines ebenen Netzes.
///
/// Für jedes Paar `(i, j)` mit `i <= j` wird bei Überlappung der Mittelwert der
/// sechs Eckpunkte gemeldet. Eine leere Liste bedeutet: keine Überschneidung.
pub fn find_overlaps_2d(vertices: &[Point2D], indices: &[u32]) -> Vec<Point2D> {
    let triangles = flatten(vertices, indices);
    let mut overlaps = Vec::new();

    for (i, first) in triangles.iter().enumerate() {
        for second in &triangles[i..] {
            if first.shares_vertex_with(second) {
                continue;
            }
            if first.overlaps(second) {
                let sum = first
                    .corners
                    .iter()
                    .chain(&second.corners)
                    .fold(Point2D::ZERO, |acc, p| acc + *p);
                overlaps.push(sum / 6.0);
            }
        }
    }

    trace!(
        "Overlap check over {} triangles found {} overlaps",
        triangles.len(),
        overlaps.len()
    );
    overlaps
}

/// Wie [`find_overlaps_2d`], für ein Bandnetz projiziert auf die Bodenebene (x, z).
pub fn find_overlaps(mesh: &StripMesh) -> Vec<Point2D> {
    find_overlaps_2d(&mesh.ground_positions(), &mesh.indices)
}
