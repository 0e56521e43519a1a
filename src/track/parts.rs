// src/track/parts.rs

//! Bestandteile einer Strecke, die aus dem geglätteten Pfad ein Netz bauen.
//!
//! Jeder Versuch läuft für alle registrierten Teile in drei Schritten ab:
//! `prepare` baut das Netz, `validate` prüft es, und erst wenn alle Teile
//! gültig sind, gibt `commit` die Netze heraus.

use crate::math::{
    error::TrackResult,
    geometry::mesh::{RibbonMeshBuilder, StripMesh, WallSide, find_overlaps},
    types::Point2D,
};
use std::fmt::Debug;

/// Ergebnis der Prüfung eines vorbereiteten Netzes.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid,
    /// Schwerpunkte der überlappenden Dreieckspaare.
    Rejected { overlaps: Vec<Point2D> },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn from_overlaps(overlaps: Vec<Point2D>) -> Self {
        if overlaps.is_empty() {
            Validation::Valid
        } else {
            Validation::Rejected { overlaps }
        }
    }
}

pub trait TrackPart: Send + Sync + Debug {
    /// Name im fertigen Track, z.B. `"road"`.
    fn label(&self) -> &str;

    /// Baut das Netz für `path` und verwirft ein vorher vorbereitetes.
    fn prepare(&mut self, path: &[Point2D]) -> TrackResult<()>;

    /// Prüft das zuletzt vorbereitete Netz. Ohne vorbereitetes Netz: `Valid`.
    fn validate(&self) -> Validation;

    /// Gibt das vorbereitete Netz heraus.
    fn commit(&mut self) -> Option<StripMesh>;
}

/// Fahrbahn. Gültig nur ohne Selbstüberschneidung.
#[derive(Debug, Clone)]
pub struct RoadSurface {
    width: f32,
    prepared: Option<StripMesh>,
}

impl RoadSurface {
    pub const LABEL: &'static str = "road";

    pub fn new(width: f32) -> Self {
        Self {
            width,
            prepared: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl TrackPart for RoadSurface {
    fn label(&self) -> &str {
        Self::LABEL
    }

    fn prepare(&mut self, path: &[Point2D]) -> TrackResult<()> {
        self.prepared = None;
        self.prepared = Some(RibbonMeshBuilder::road(self.width).build(path)?);
        Ok(())
    }

    fn validate(&self) -> Validation {
        match &self.prepared {
            Some(mesh) => Validation::from_overlaps(find_overlaps(mesh)),
            None => Validation::Valid,
        }
    }

    fn commit(&mut self) -> Option<StripMesh> {
        self.prepared.take()
    }
}

/// Wand an einer Fahrbahnkante. Wände folgen der Straße und gelten immer als gültig.
#[derive(Debug, Clone)]
pub struct TrackWall {
    side: WallSide,
    width: f32,
    height: f32,
    prepared: Option<StripMesh>,
}

impl TrackWall {
    pub fn new(side: WallSide, width: f32, height: f32) -> Self {
        Self {
            side,
            width,
            height,
            prepared: None,
        }
    }
}

impl TrackPart for TrackWall {
    fn label(&self) -> &str {
        match self.side {
            WallSide::Left => "wall_left",
            WallSide::Right => "wall_right",
        }
    }

    fn prepare(&mut self, path: &[Point2D]) -> TrackResult<()> {
        self.prepared = None;
        self.prepared =
            Some(RibbonMeshBuilder::wall(self.width, self.height, self.side).build(path)?);
        Ok(())
    }

    fn validate(&self) -> Validation {
        Validation::Valid
    }

    fn commit(&mut self) -> Option<StripMesh> {
        self.prepared.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: usize) -> Vec<Point2D> {
        (0..n)
            .map(|i| {
                let a = i as f32 * std::f32::consts::TAU / n as f32;
                Point2D::new(30.0 * a.cos(), 30.0 * a.sin())
            })
            .collect()
    }

    fn bow_tie() -> Vec<Point2D> {
        (0..48)
            .map(|i| {
                let t = i as f32 * std::f32::consts::TAU / 48.0;
                Point2D::new(30.0 * t.sin(), 15.0 * (2.0 * t).sin())
            })
            .collect()
    }

    #[test]
    fn test_road_lifecycle() {
        let mut road = RoadSurface::new(4.0);
        assert!(road.validate().is_valid());
        assert!(road.commit().is_none());

        road.prepare(&ring(40)).unwrap();
        assert!(road.validate().is_valid());
        let mesh = road.commit().unwrap();
        assert_eq!(mesh.vertex_count(), 80);
        assert!(road.commit().is_none());
    }

    #[test]
    fn test_road_rejects_crossing_path() {
        let mut road = RoadSurface::new(4.0);
        road.prepare(&bow_tie()).unwrap();
        match road.validate() {
            Validation::Rejected { overlaps } => assert!(!overlaps.is_empty()),
            Validation::Valid => panic!("crossing road must be rejected"),
        }
    }

    #[test]
    fn test_walls_are_always_valid() {
        let mut wall = TrackWall::new(WallSide::Right, 4.0, 1.0);
        wall.prepare(&bow_tie()).unwrap();
        assert!(wall.validate().is_valid());
        assert_eq!(wall.label(), "wall_right");
        assert!(wall.commit().is_some());
    }

    #[test]
    fn test_prepare_error_clears_previous_mesh() {
        let mut road = RoadSurface::new(4.0);
        road.prepare(&ring(12)).unwrap();
        assert!(road.prepare(&[]).is_err());
        assert!(road.commit().is_none());
    }
}
