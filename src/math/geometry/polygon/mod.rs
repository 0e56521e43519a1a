// src/math/geometry/polygon/mod.rs

// Polygone werden als geschlossene Ringe `&[Vec2]` ohne doppelten Schlusspunkt behandelt.
pub mod distortion; // Konkave Verzerrung der Hülle
pub mod properties; // Fläche, Orientierung, Umfang, Punkt-in-Polygon

pub use self::distortion::{ConcaveDistorter, distort_concave};
pub use self::properties::{Orientation, contains_point, is_convex, orientation, perimeter, signed_area};
