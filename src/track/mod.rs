// src/track/mod.rs

pub mod api; // Freie Funktionen für einzelne Schritte
pub mod config;
pub mod generator; // Versuchsschleife
pub mod parts; // Fahrbahn, Wände und weitere Validatoren
pub mod path;
pub mod plugin;
pub mod resources;
pub mod state;

pub use self::api::{build_ribbon_mesh, build_wall_mesh, find_overlaps, generate_path};
pub use self::config::{SmoothingConfig, TrackGenerationConfig, WallConfig};
pub use self::generator::{CommittedPart, CommittedTrack, TrackGenerator, TrackSkeleton};
pub use self::parts::{RoadSurface, TrackPart, TrackWall, Validation};
pub use self::path::{SmoothedPath, TrackStart, get_start};
pub use self::plugin::TrackGenerationPlugin;
pub use self::resources::{
    CommittedTrackResource, RegenerateTrackEvent, TrackGeneratorResource, TrackSettings,
};
pub use self::state::GenerationState;
