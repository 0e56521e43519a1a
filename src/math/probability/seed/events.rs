use bevy::prelude::*;

/// Fordert einen neuen Seed für alle folgenden Generierungen an.
#[derive(Event, Debug, Clone)]
pub struct SeedChangedEvent {
    pub new_seed: u64,
}
