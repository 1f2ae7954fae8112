//! Per-request level build parameters.
//!
//! Every field that a caller may leave unspecified is an `Option`, so "not given"
//! stays distinguishable from a falsy value such as `tile_count = Some(0)`.

use std::path::PathBuf;

/// Width and height of a viewport, in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Options controlling how a blank level is initialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelInitializationParams {
    /// Tiled map to load. When absent, map and character setup are skipped.
    pub tmx_path: Option<PathBuf>,
    /// Forwarded to pathfinder setup whether or not a map is loaded.
    pub allow_diagonal_movement: bool,
    /// Viewport to create. When absent, the level has no viewport.
    pub viewport: Option<ViewportSize>,
}

impl LevelInitializationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the map source (builder pattern).
    #[must_use]
    pub fn with_tmx_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tmx_path = Some(path.into());
        self
    }

    /// Sets the diagonal movement flag (builder pattern).
    #[must_use]
    pub fn with_diagonal_movement(mut self, allow: bool) -> Self {
        self.allow_diagonal_movement = allow;
        self
    }

    /// Requests a viewport of the given size (builder pattern).
    #[must_use]
    pub fn with_viewport(mut self, size: ViewportSize) -> Self {
        self.viewport = Some(size);
        self
    }
}

/// Instructions for scattering random tiles over one layer of a level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelRandomizationParams {
    /// Tile layer to randomize. Required.
    pub layer_name: Option<String>,
    /// Number of tiles to place. Required.
    pub tile_count: Option<usize>,
    /// Highest tile gid (inclusive) that may be placed.
    pub tile_maximum: Option<u32>,
}

impl LevelRandomizationParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layer_name(mut self, layer_name: impl Into<String>) -> Self {
        self.layer_name = Some(layer_name.into());
        self
    }

    #[must_use]
    pub fn with_tile_count(mut self, tile_count: usize) -> Self {
        self.tile_count = Some(tile_count);
        self
    }

    #[must_use]
    pub fn with_tile_maximum(mut self, tile_maximum: u32) -> Self {
        self.tile_maximum = Some(tile_maximum);
        self
    }
}
