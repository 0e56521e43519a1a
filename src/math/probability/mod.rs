pub mod gaussian;
pub mod seed;

pub use gaussian::{sample_normal, sample_truncated_normal};
pub use seed::{SeedChangedEvent, SeedPlugin, TrackSeed};
