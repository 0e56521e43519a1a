pub mod random_points;

pub use random_points::{MIN_POINT_COUNT, PointSetBounds, random_point_set};
