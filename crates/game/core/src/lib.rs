//! Level data types shared across the turnable workspace.
//!
//! `turnable-core` defines the pieces a level is assembled from (tile maps,
//! character rosters, walkability grids, transition points, viewports), the
//! per-request build parameters, and the clamped [`Stat`] value type used by
//! gameplay code. It performs no I/O: `turnable-content` loads maps and
//! configuration, and `turnable-runtime` orchestrates level construction.
pub mod characters;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod pathfinding;
pub mod position;
pub mod stats;
pub mod transitions;
pub mod viewport;

pub use characters::{Character, CharacterError, CharacterId, CharacterManager};
pub use config::LevelConfig;
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use map::{
    MapDimensions, MapObject, ObjectGroup, Properties, Property, PropertyError, PropertyType,
    TileGid, TileLayer, TileMap, TileSize,
};
pub use params::{LevelInitializationParams, LevelRandomizationParams, ViewportSize};
pub use pathfinding::{PathFinder, WalkabilityGrid};
pub use position::Position;
pub use stats::{Stat, StatBounds, StatChanged, StatError, StatId, StatManager, SubscriptionId};
pub use transitions::{TransitionPoint, TransitionPointManager};
pub use viewport::Viewport;
