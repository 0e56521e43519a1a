// src/math/types/bounds.rs

use crate::math::types::Point2D;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min = min.min(point);
            max = max.max(point);
        }

        Some(Self { min, max })
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Prüft ob sich zwei Bounding Boxes überschneiden (Berührung zählt)
    pub fn intersects(&self, other: &Bounds2D) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Erweitert die Bounding Box um einen Margin
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: self.min - Point2D::splat(margin),
            max: self.max + Point2D::splat(margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_iter() {
        let bounds = Bounds2D::from_points_iter([
            Point2D::new(1.0, 5.0),
            Point2D::new(-2.0, 3.0),
            Point2D::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Point2D::new(-2.0, -1.0));
        assert_eq!(bounds.max, Point2D::new(4.0, 5.0));
        assert_eq!(bounds.width(), 6.0);
        assert!(Bounds2D::from_points_iter(std::iter::empty()).is_none());
    }

    #[test]
    fn test_intersects_touching() {
        let square = |min: f32, max: f32| Bounds2D {
            min: Point2D::splat(min),
            max: Point2D::splat(max),
        };
        let (a, b, c) = (square(0.0, 1.0), square(1.0, 2.0), square(1.5, 2.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
