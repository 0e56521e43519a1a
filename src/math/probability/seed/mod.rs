pub mod events;
pub mod plugin;
pub mod resource;

pub use events::SeedChangedEvent;
pub use plugin::SeedPlugin;
pub use resource::TrackSeed;
