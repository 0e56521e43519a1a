//! Provides a Bevy `Plugin` that owns the global `TrackSeed`.
//!
//! The plugin initializes the `TrackSeed` resource and listens for
//! `SeedChangedEvent` to replace it.

use super::{events::SeedChangedEvent, resource::TrackSeed};
use bevy::prelude::*;

/// A Bevy `Plugin` responsible for managing the global `TrackSeed`.
///
/// - Initializes the `TrackSeed` if it doesn't already exist.
/// - Registers the `SeedChangedEvent`.
/// - Adds `seed_changed_event_handler` to apply incoming seed changes.
pub struct SeedPlugin;

impl Plugin for SeedPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrackSeed>()
            .add_event::<SeedChangedEvent>()
            .add_systems(PreUpdate, seed_changed_event_handler);
    }
}

/// Replaces the `TrackSeed` with the seed of the last `SeedChangedEvent`.
fn seed_changed_event_handler(
    mut events: EventReader<SeedChangedEvent>,
    mut seed_resource: ResMut<TrackSeed>,
) {
    for event in events.read() {
        info!(
            "TrackSeed is being updated due to SeedChangedEvent: {}",
            event.new_seed
        );
        *seed_resource = TrackSeed::from_seed(event.new_seed);
    }
}
