//! Data-driven level content and loaders.
//!
//! This crate reads the files a level is built from:
//! - Tiled maps (`.tmx`, with external `.tsx` tilesets) into [`turnable_core::TileMap`]
//! - Level configuration (TOML) into [`turnable_core::LevelConfig`]
//! - Level build requests (TOML or RON) into [`LevelRequest`]
//!
//! Loaded content is plain data; `turnable-runtime` assembles levels from it.

pub mod loaders;

pub use loaders::{
    ConfigLoader, ContentFactory, LevelRequest, LoadResult, MapLoadError, RequestLoader, TmxLoader,
};
