// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod mesh;
pub mod polygon;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::mesh::{
    RibbonMeshBuilder, StripMesh, WallSide, build_road_mesh, build_wall_mesh, find_overlaps,
    find_overlaps_2d, path_tangents,
};
pub use self::polygon::{ConcaveDistorter, Orientation, distort_concave};
