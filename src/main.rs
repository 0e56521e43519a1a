// ./src/main.rs
use bevy::{app::AppExit, log::LogPlugin, prelude::*};
use clap::Parser;
use procedural_racetrack::{
    debug::visualization::write_track_svg,
    math::{error::TrackResult, probability::TrackSeed},
    track::{
        CommittedTrackResource, GenerationState, RegenerateTrackEvent, TrackGenerationConfig,
        TrackGenerationPlugin, TrackSettings,
    },
};
use std::path::PathBuf;

const OUTPUT_FILE: &str = "track.svg";
/// Höhe, in der ein Fahrzeug über dem Startpunkt abgesetzt wird.
const SPAWN_HEIGHT: f32 = 2.0;

#[derive(Parser, Debug)]
#[command(name = "procedural_racetrack")]
#[command(version, about = "Generates a closed race track and writes a top-down SVG")]
struct Cli {
    /// Seed text; the same text always yields the same track. Random if omitted.
    seed: Option<String>,

    /// Path to a track generation config (TOML). Defaults apply if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn track_seed(&self) -> TrackSeed {
        self.seed
            .as_deref()
            .map(TrackSeed::from_text)
            .unwrap_or_default()
    }

    fn settings(&self) -> TrackResult<TrackSettings> {
        let config = match &self.config {
            Some(path) => TrackGenerationConfig::load(path)?,
            None => TrackGenerationConfig::default(),
        };
        Ok(TrackSettings { config })
    }
}

fn main() -> TrackResult<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;

    App::new()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(cli.track_seed())
        .insert_resource(settings)
        .add_plugins(TrackGenerationPlugin)
        .add_systems(Startup, request_track_system)
        .add_systems(
            Update,
            (
                export_track_system.run_if(resource_exists::<CommittedTrackResource>),
                report_exhausted_system.run_if(in_state(GenerationState::Exhausted)),
            ),
        )
        .run();
    Ok(())
}

fn request_track_system(seed: Res<TrackSeed>, mut events: EventWriter<RegenerateTrackEvent>) {
    info!("Generating track with seed {}", seed.seed);
    events.send(RegenerateTrackEvent);
}

fn export_track_system(track: Res<CommittedTrackResource>, mut exit: EventWriter<AppExit>) {
    let track = &track.0;
    let (position, direction) = track.start.on_ground(SPAWN_HEIGHT);
    info!(
        "Track committed after {} attempts: {} path points, length {:.1}",
        track.attempts,
        track.path.len(),
        track.path.perimeter()
    );
    info!("Start at {position:?}, facing {direction:?}");
    for part in &track.parts {
        info!(
            "  {}: {} vertices, {} triangles",
            part.label,
            part.mesh.vertex_count(),
            part.mesh.triangle_count()
        );
    }
    if let Err(err) = write_track_svg(OUTPUT_FILE, track) {
        error!("Could not write {OUTPUT_FILE}: {err}");
    }
    exit.send(AppExit);
}

fn report_exhausted_system(mut exit: EventWriter<AppExit>) {
    error!("No valid track found, giving up");
    exit.send(AppExit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use procedural_racetrack::math::error::TrackError;

    #[test]
    fn test_seed_and_config_are_separate_arguments() {
        let cli = Cli::try_parse_from(["procedural_racetrack", "monza", "--config", "track.toml"])
            .unwrap();
        assert_eq!(cli.seed.as_deref(), Some("monza"));
        assert_eq!(cli.config, Some(PathBuf::from("track.toml")));
        assert_eq!(cli.track_seed(), TrackSeed::from_text("monza"));
    }

    #[test]
    fn test_config_path_is_not_taken_as_seed() {
        let cli = Cli::try_parse_from(["procedural_racetrack", "-c", "cfg.toml"]).unwrap();
        assert!(cli.seed.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
    }

    #[test]
    fn test_help_is_not_a_seed() {
        let err = Cli::try_parse_from(["procedural_racetrack", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_defaults_without_arguments() {
        let cli = Cli::try_parse_from(["procedural_racetrack"]).unwrap();
        assert_eq!(cli.settings().unwrap().config, TrackGenerationConfig::default());
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let cli = Cli::try_parse_from(["procedural_racetrack", "-c", "does/not/exist.toml"])
            .unwrap();
        assert!(matches!(cli.settings(), Err(TrackError::Io(_))));
    }
}
