// src/math/geometry/mesh/ribbon.rs

//! Baut Straßen- und Wandnetze entlang eines geschlossenen Pfads.
//!
//! Für jeden Pfadpunkt `p` mit Tangente `t` entstehen zwei Vertices. Die Straße
//! spannt sich zwischen `p + perp(t)·w/2` (links) und `p − perp(t)·w/2` (rechts),
//! mit `perp(v) = (v.y, −v.x)`. Eine Wand steht auf einer Straßenkante und
//! besteht aus dem Bodenpunkt und dem um `height` angehobenen Punkt.

use super::strip::{StripMesh, path_tangents};
use crate::math::{
    error::{TrackError, TrackResult},
    types::{Point2D, Point3D},
    utils::simple_geometry::right_perpendicular,
};
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Straßenseite einer Wand, in Fahrtrichtung gesehen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
}

/// Art des Bandes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RibbonKind {
    /// Fahrbahn in der Bodenebene, Oberseite zeigt nach +Y.
    Road,
    /// Senkrechte Wand an einer Straßenkante, Vorderseite zeigt zur Strecke.
    Wall { side: WallSide, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonMeshBuilder {
    width: f32,
    kind: RibbonKind,
}

impl RibbonMeshBuilder {
    pub fn road(width: f32) -> Self {
        Self {
            width,
            kind: RibbonKind::Road,
        }
    }

    pub fn wall(width: f32, height: f32, side: WallSide) -> Self {
        Self {
            width,
            kind: RibbonKind::Wall { side, height },
        }
    }

    fn validate(&self, path: &[Point2D]) -> TrackResult<()> {
        if path.is_empty() {
            return Err(TrackError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }
        if !(self.width > 0.0) || !self.width.is_finite() {
            return Err(TrackError::invalid_argument(format!(
                "ribbon width must be positive, got {}",
                self.width
            )));
        }
        if let RibbonKind::Wall { height, .. } = self.kind {
            if !(height > 0.0) || !height.is_finite() {
                return Err(TrackError::invalid_argument(format!(
                    "wall height must be positive, got {height}"
                )));
            }
        }
        Ok(())
    }

    /// Baut das Netz für den geschlossenen Pfad `path`.
    ///
    /// # Errors
    /// `InsufficientPoints` für einen leeren Pfad, `InvalidArgument` für
    /// nicht-positive Breite oder Höhe.
    pub fn build(&self, path: &[Point2D]) -> TrackResult<StripMesh> {
        self.validate(path)?;

        let n = path.len();
        let vertex_count = 2 * n;
        let tangents = path_tangents(path);
        let half_width = 0.5 * self.width;

        let mut mesh = StripMesh {
            positions: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(6 * n),
        };

        for (i, (&p, &t)) in path.iter().zip(&tangents).enumerate() {
            let offset = right_perpendicular(t) * half_width;
            let left = on_ground(p + offset);
            let right = on_ground(p - offset);

            let (first, second) = match self.kind {
                RibbonKind::Road => (left, right),
                RibbonKind::Wall { side, height } => {
                    let base = match side {
                        WallSide::Left => left,
                        WallSide::Right => right,
                    };
                    (base, base + Point3D::new(0.0, height, 0.0))
                }
            };
            mesh.positions.push(first);
            mesh.positions.push(second);

            let v = uv_v(i, n);
            mesh.uvs.push(Vec2::new(0.0, v));
            mesh.uvs.push(Vec2::new(1.0, v));

            let b = (2 * i) as u32;
            let m = vertex_count as u32;
            mesh.indices.extend_from_slice(&[
                b,
                (b + 2) % m,
                b + 1,
                b + 1,
                (b + 2) % m,
                (b + 3) % m,
            ]);
        }

        // Grundwicklung: Straße zeigt nach −Y, linke Wand zur Strecke, rechte Wand nach außen
        match self.kind {
            RibbonKind::Road
            | RibbonKind::Wall {
                side: WallSide::Right,
                ..
            } => mesh.flip_winding(),
            RibbonKind::Wall {
                side: WallSide::Left,
                ..
            } => {}
        }

        Ok(mesh)
    }
}

#[inline]
fn on_ground(p: Point2D) -> Point3D {
    Point3D::new(p.x, 0.0, p.y)
}

/// V-Koordinate aus dem Streckenfortschritt `c = i / (n − 1)`: `−1 − |2c − 1|`.
#[inline]
fn uv_v(i: usize, n: usize) -> f32 {
    let completion = if n > 1 {
        i as f32 / (n - 1) as f32
    } else {
        0.0
    };
    -1.0 - (2.0 * completion - 1.0).abs()
}

/// Straßennetz der Breite `width`.
pub fn build_road_mesh(path: &[Point2D], width: f32) -> TrackResult<StripMesh> {
    RibbonMeshBuilder::road(width).build(path)
}

/// Wandnetz an der Kante `side` einer Straße der Breite `width`.
pub fn build_wall_mesh(
    path: &[Point2D],
    width: f32,
    height: f32,
    side: WallSide,
) -> TrackResult<StripMesh> {
    RibbonMeshBuilder::wall(width, height, side).build(path)
}
