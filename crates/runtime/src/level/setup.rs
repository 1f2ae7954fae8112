use std::path::Path;

use turnable_core::{TileMap, ViewportSize};

use crate::error::Result;

/// Setup surface a level under construction exposes to factories and randomizers.
///
/// [`LevelFactory`](crate::LevelFactory) and
/// [`LevelRandomizer`](crate::LevelRandomizer) drive levels only through this
/// trait, so alternative map backends and recording test doubles can stand in
/// for [`Level`](crate::Level).
pub trait LevelSetup {
    /// Loads the map at `path`. Fails if the path does not resolve to a valid map.
    fn set_up_map(&mut self, path: &Path) -> Result<()>;

    /// Builds the character roster from the loaded map.
    fn set_up_characters(&mut self) -> Result<()>;

    /// Builds the pathfinder. Must succeed without a loaded map.
    fn set_up_pathfinder(&mut self, allow_diagonal_movement: bool) -> Result<()>;

    /// Creates a viewport of `size` tiles.
    ///
    /// # Arguments
    ///
    /// * `size` - Viewport width and height in tiles
    ///
    /// # Returns
    ///
    /// `Ok(())` once the viewport exists. Must succeed without a loaded map;
    /// with a map and a player, the viewport is centered on the player.
    fn set_up_viewport(&mut self, size: ViewportSize) -> Result<()>;

    /// Mutable access to the loaded map, `None` before map setup.
    fn map_mut(&mut self) -> Option<&mut TileMap>;

    /// Called after tiles of `layer_name` were rewritten.
    ///
    /// Implementations refresh whatever they derived from that layer.
    fn layer_changed(&mut self, _layer_name: &str) -> Result<()> {
        Ok(())
    }
}
