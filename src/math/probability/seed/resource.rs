use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Globaler Seed für die Streckengenerierung.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackSeed {
    pub seed: u64,
}

impl TrackSeed {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_text<S: AsRef<str>>(text: S) -> Self {
        let mut hasher = DefaultHasher::new();
        text.as_ref().hash(&mut hasher);
        let seed = hasher.finish();
        Self::from_seed(seed)
    }

    /// Frischer, deterministischer Generator für diesen Seed.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

impl Default for TrackSeed {
    fn default() -> Self {
        let seed_number = rand::random::<u64>();
        Self::from_seed(seed_number)
    }
}
