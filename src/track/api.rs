// src/track/api.rs

//! Freie Funktionen für Aufrufer, die nur einzelne Schritte brauchen.

use super::{
    config::{SmoothingConfig, TrackGenerationConfig},
    generator::TrackGenerator,
    path::SmoothedPath,
};
use crate::math::{
    error::TrackResult,
    geometry::mesh::{self, StripMesh, WallSide},
    types::Point2D,
};

/// Erzeugt einen gültigen, geglätteten Streckenverlauf mit zufälligem Seed.
///
/// Die Gültigkeit wird wie im vollständigen Generator an einer Fahrbahn mit
/// Standardbreite geprüft; Wände werden dabei nicht gebaut.
///
/// # Errors
/// `InvalidArgument`/`InsufficientPoints` für ungültige Parameter,
/// `Exhausted`, wenn kein gültiger Verlauf gefunden wurde.
pub fn generate_path(
    range_x: u32,
    range_y: u32,
    point_count: usize,
    concavity_probability: f32,
    smoothing: impl Into<SmoothingConfig>,
) -> TrackResult<SmoothedPath> {
    let config = TrackGenerationConfig::default()
        .with_range(range_x, range_y)
        .with_point_count(point_count)
        .with_concavity_probability(concavity_probability)
        .with_smoothing(smoothing)
        .with_walls(None);
    let track = TrackGenerator::new(config)?.generate()?;
    Ok(track.path)
}

/// Fahrbahnnetz der Breite `width` entlang `path`.
pub fn build_ribbon_mesh(path: &SmoothedPath, width: f32) -> TrackResult<StripMesh> {
    mesh::build_road_mesh(path.points(), width)
}

/// Wandnetz der Höhe `height` an der Kante `side` einer Fahrbahn der Breite `width`.
pub fn build_wall_mesh(
    path: &SmoothedPath,
    width: f32,
    height: f32,
    side: WallSide,
) -> TrackResult<StripMesh> {
    mesh::build_wall_mesh(path.points(), width, height, side)
}

/// Schwerpunkte aller überlappenden Dreieckspaare in der Bodenebene.
pub fn find_overlaps(mesh: &StripMesh) -> Vec<Point2D> {
    mesh::find_overlaps(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::path::get_start;

    #[test]
    fn test_generate_path_and_build_meshes() {
        let path = generate_path(100, 100, 8, 0.5, SmoothingConfig::bezier(4.0)).unwrap();
        assert!(path.len() >= 3);

        let road = build_ribbon_mesh(&path, 5.0).unwrap();
        assert!(find_overlaps(&road).is_empty());
        assert_eq!(road.indices.len(), 6 * path.len());

        let wall = build_wall_mesh(&path, 5.0, 1.0, WallSide::Left).unwrap();
        assert_eq!(wall.vertex_count(), road.vertex_count());

        let start = get_start(&path).unwrap();
        assert!((start.direction.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_inputs_are_rejected() {
        let err = generate_path(100, 100, 2, 0.5, SmoothingConfig::default()).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = generate_path(100, 100, 8, 1.5, SmoothingConfig::default()).unwrap_err();
        assert!(err.is_invalid_argument());

        let path = SmoothedPath::new(vec![Point2D::ZERO, Point2D::X, Point2D::Y]).unwrap();
        assert!(build_ribbon_mesh(&path, 0.0).unwrap_err().is_invalid_argument());
        assert!(build_wall_mesh(&path, 1.0, 0.0, WallSide::Right).unwrap_err().is_invalid_argument());
    }
}
