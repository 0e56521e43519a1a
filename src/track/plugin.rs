//! Headless Bevy-Plugin für die Streckengenerierung.
//!
//! Hält Einstellungen, Seed und Generator als Ressourcen und erzeugt bei jedem
//! `RegenerateTrackEvent` eine neue Strecke. Es wird nichts gerendert.

use super::{
    generator::TrackGenerator,
    resources::{CommittedTrackResource, RegenerateTrackEvent, TrackGeneratorResource, TrackSettings},
    state::GenerationState,
};
use crate::math::probability::{SeedPlugin, TrackSeed};
use bevy::prelude::*;

pub struct TrackGenerationPlugin;

impl Plugin for TrackGenerationPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<SeedPlugin>() {
            app.add_plugins(SeedPlugin);
        }
        app.init_resource::<TrackSettings>()
            .init_state::<GenerationState>()
            .add_event::<RegenerateTrackEvent>()
            .add_systems(
                Update,
                (sync_generator_system, regenerate_track_system).chain(),
            );
    }
}

/// Baut den Generator neu, sobald sich Einstellungen oder Seed ändern.
fn sync_generator_system(
    mut commands: Commands,
    settings: Res<TrackSettings>,
    seed: Res<TrackSeed>,
    generator: Option<Res<TrackGeneratorResource>>,
) {
    if generator.is_some() && !settings.is_changed() && !seed.is_changed() {
        return;
    }
    match TrackGenerator::with_track_seed(settings.config.clone(), *seed) {
        Ok(generator) => {
            debug!("Track generator rebuilt with seed {}", seed.seed);
            commands.insert_resource(TrackGeneratorResource(generator));
        }
        Err(err) => {
            error!("Track settings rejected: {err}");
            commands.remove_resource::<TrackGeneratorResource>();
        }
    }
}

/// Erzeugt pro Frame höchstens eine Strecke, egal wie viele Anfragen vorliegen.
fn regenerate_track_system(
    mut commands: Commands,
    mut events: EventReader<RegenerateTrackEvent>,
    generator: Option<ResMut<TrackGeneratorResource>>,
    mut next_state: ResMut<NextState<GenerationState>>,
) {
    if events.read().count() == 0 {
        return;
    }
    let Some(mut generator) = generator else {
        warn!("Track regeneration requested, but no valid generator exists");
        return;
    };

    match generator.0.generate() {
        Ok(track) => {
            info!(
                "New track ready: {} parts, start at {:?}",
                track.parts.len(),
                track.start.position
            );
            commands.insert_resource(CommittedTrackResource(track));
            next_state.set(GenerationState::Committed);
        }
        Err(err) => {
            warn!("Track generation failed: {err}");
            next_state.set(GenerationState::Exhausted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::probability::SeedChangedEvent;
    use crate::track::config::TrackGenerationConfig;

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(TrackSeed::from_seed(17))
            .add_plugins(TrackGenerationPlugin);
        app
    }

    #[test]
    fn test_no_track_without_request() {
        let mut app = test_app();
        app.update();
        assert!(app.world.get_resource::<TrackGeneratorResource>().is_some());
        assert!(app.world.get_resource::<CommittedTrackResource>().is_none());
    }

    #[test]
    fn test_request_commits_track() {
        let mut app = test_app();
        app.world.send_event(RegenerateTrackEvent);
        app.update();
        app.update();

        let track = &app.world.resource::<CommittedTrackResource>().0;
        assert!(track.road().is_some());
        assert_eq!(
            *app.world.resource::<State<GenerationState>>().get(),
            GenerationState::Committed
        );
    }

    #[test]
    fn test_successive_requests_differ_and_seed_restores() {
        let mut app = test_app();
        let request = |app: &mut App| {
            app.world.send_event(RegenerateTrackEvent);
            app.update();
            app.world.resource::<CommittedTrackResource>().0.clone()
        };

        let first = request(&mut app);
        let second = request(&mut app);
        assert_ne!(first.path, second.path);

        app.world.send_event(SeedChangedEvent { new_seed: 17 });
        let replay = request(&mut app);
        assert_eq!(first, replay);
    }

    #[test]
    fn test_invalid_settings_remove_generator() {
        let mut app = test_app();
        app.update();
        app.world.resource_mut::<TrackSettings>().config =
            TrackGenerationConfig::default().with_point_count(1);
        app.world.send_event(RegenerateTrackEvent);
        app.update();
        assert!(app.world.get_resource::<TrackGeneratorResource>().is_none());
        assert!(app.world.get_resource::<CommittedTrackResource>().is_none());
    }
}
