// src/lib.rs

//! Prozedurale Generierung geschlossener Rennstrecken.
//!
//! Ablauf: Zufallspunkte, konvexe Hülle, konkave Verzerrung, Glättung,
//! Fahrbahn- und Wandnetze, Überschneidungsprüfung. Ungültige Versuche werden
//! verworfen und neu gewürfelt.

pub mod debug;
pub mod math;
pub mod track;

pub mod prelude {
    pub use crate::debug::visualization::{render_overlap_svg, render_track_svg, write_track_svg};
    pub use crate::math::prelude::*;
    pub use crate::track::{
        CommittedTrack, CommittedTrackResource, GenerationState, RegenerateTrackEvent,
        SmoothedPath, SmoothingConfig, TrackGenerationConfig, TrackGenerationPlugin,
        TrackGenerator, TrackSettings, TrackStart, WallConfig, build_ribbon_mesh, generate_path,
        get_start,
    };
}
