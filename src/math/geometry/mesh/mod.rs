// src/math/geometry/mesh/mod.rs

pub mod overlap; // Überschneidungstest zwischen Dreiecken
pub mod ribbon; // Straße und Wände entlang eines Pfads
pub mod strip; // Netzdaten und Tangenten

pub use self::overlap::{find_overlaps, find_overlaps_2d};
pub use self::ribbon::{RibbonKind, RibbonMeshBuilder, WallSide, build_road_mesh, build_wall_mesh};
pub use self::strip::{StripMesh, path_tangents};
