// src/track/path.rs

use crate::math::{
    error::{TrackError, TrackResult},
    geometry::{mesh::path_tangents, polygon::perimeter},
    types::{Point2D, Point3D},
};

/// Geglätteter, geschlossener Streckenverlauf (Index 0 folgt auf den letzten Punkt).
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedPath(Vec<Point2D>);

impl SmoothedPath {
    /// # Errors
    /// `InsufficientPoints` für einen leeren Punktzug.
    pub fn new(points: Vec<Point2D>) -> TrackResult<Self> {
        if points.is_empty() {
            return Err(TrackError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }
        Ok(Self(points))
    }

    pub fn points(&self) -> &[Point2D] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Einheitstangenten, eine pro Punkt.
    pub fn tangents(&self) -> Vec<Point2D> {
        path_tangents(&self.0)
    }

    /// Länge des geschlossenen Verlaufs inklusive Schlusskante.
    pub fn perimeter(&self) -> f32 {
        perimeter(&self.0)
    }

    pub fn start(&self) -> TrackResult<TrackStart> {
        get_start(self)
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.0
    }
}

impl AsRef<[Point2D]> for SmoothedPath {
    fn as_ref(&self) -> &[Point2D] {
        &self.0
    }
}

/// Startposition und Fahrtrichtung auf der Strecke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStart {
    pub position: Point2D,
    /// Einheitsvektor.
    pub direction: Point2D,
}

impl TrackStart {
    /// Position `spawn_height` über dem Boden und Richtung in der Bodenebene (x, z).
    pub fn on_ground(&self, spawn_height: f32) -> (Point3D, Point3D) {
        (
            Point3D::new(self.position.x, spawn_height, self.position.y),
            Point3D::new(self.direction.x, 0.0, self.direction.y),
        )
    }
}

/// Mitte des ersten Segments, Richtung zum zweiten Punkt.
///
/// Der Start liegt damit nicht auf dem ersten Pfadpunkt selbst.
///
/// # Errors
/// `InsufficientPoints` bei weniger als 2 Punkten, `InvalidArgument`, wenn die
/// ersten beiden Punkte zusammenfallen.
pub fn get_start(path: &SmoothedPath) -> TrackResult<TrackStart> {
    let [first, second, ..] = path.points() else {
        return Err(TrackError::InsufficientPoints {
            expected: 2,
            actual: path.len(),
        });
    };
    let position = first.lerp(*second, 0.5);
    let direction = (*second - position).try_normalize().ok_or_else(|| {
        TrackError::invalid_argument("the first two path points coincide, no start direction")
    })?;
    Ok(TrackStart {
        position,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_start_is_midpoint_of_first_segment() {
        let path = SmoothedPath::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 4.0),
        ])
        .unwrap();
        let start = get_start(&path).unwrap();
        assert_eq!(start.position, Point2D::new(2.0, 0.0));
        assert_eq!(start.direction, Point2D::X);

        let (position, direction) = start.on_ground(2.0);
        assert_eq!(position, Point3D::new(2.0, 2.0, 0.0));
        assert_eq!(direction, Point3D::X);
    }

    #[test]
    fn test_start_needs_two_distinct_points() {
        let single = SmoothedPath::new(vec![Point2D::ONE]).unwrap();
        assert!(get_start(&single).unwrap_err().is_invalid_argument());

        let doubled = SmoothedPath::new(vec![Point2D::ONE, Point2D::ONE]).unwrap();
        assert!(get_start(&doubled).unwrap_err().is_invalid_argument());

        assert!(SmoothedPath::new(Vec::new()).is_err());
    }

    #[test]
    fn test_perimeter_and_tangents() {
        let path = SmoothedPath::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(3.0, 4.0),
        ])
        .unwrap();
        assert_relative_eq!(path.perimeter(), 12.0);
        assert_eq!(path.tangents().len(), 3);
    }
}
