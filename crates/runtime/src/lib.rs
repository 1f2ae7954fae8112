//! Level construction for turnable.
//!
//! This crate assembles [`Level`]s from Tiled maps:
//! - [`factory`] builds blank, initialized and randomized levels
//! - [`level`] holds the level aggregate and its [`LevelSetup`] surface
//! - [`randomizer`] scatters random tiles over a loaded map
//! - [`world`] is the owning context that supplies map conventions
//!
//! Everything runs synchronously on the calling thread.
pub mod error;
pub mod factory;
pub mod level;
pub mod randomizer;
pub mod world;

pub use error::{LevelError, Result};
pub use factory::{LevelFactory, TiledLevelFactory};
pub use level::{Level, LevelSetup};
pub use randomizer::{LevelRandomizer, TileRandomizer};
pub use world::World;
