use super::{
    config::TrackGenerationConfig,
    generator::{CommittedTrack, TrackGenerator},
};
use bevy::prelude::*;

/// Konfiguration, mit der der Generator aufgebaut wird. Änderungen bauen ihn neu auf.
#[derive(Resource, Debug, Clone, Default)]
pub struct TrackSettings {
    pub config: TrackGenerationConfig,
}

/// Fordert eine neue Strecke an.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RegenerateTrackEvent;

/// Der Generator samt Zufallszustand; aufeinanderfolgende Anfragen liefern verschiedene Strecken.
#[derive(Resource, Debug)]
pub struct TrackGeneratorResource(pub TrackGenerator);

/// Die zuletzt erfolgreich erzeugte Strecke.
#[derive(Resource, Debug, Clone)]
pub struct CommittedTrackResource(pub CommittedTrack);
