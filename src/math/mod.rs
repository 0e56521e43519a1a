pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod point_distribution;
pub mod probability;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{TrackError, TrackResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::{
            BezierSmoother, ChaikinSmoother, ConvexHullBuilder, PathSmoother, Smoothing,
            convex_hull,
        },
        error::{TrackError, TrackResult},
        geometry::{
            ConcaveDistorter, RibbonMeshBuilder, StripMesh, WallSide, build_road_mesh,
            build_wall_mesh, find_overlaps, find_overlaps_2d,
        },
        point_distribution::{PointSetBounds, random_point_set},
        probability::{TrackSeed, sample_normal},
        types::*,
    };
}
