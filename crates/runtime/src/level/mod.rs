//! The level aggregate.
//!
//! A [`Level`] starts blank (only its [`World`] is set) and is filled in by a
//! [`LevelFactory`](crate::LevelFactory) through the [`LevelSetup`] trait.
//! Every structural part stays `None` until its setup step ran.
mod setup;

use std::path::Path;
use std::sync::Arc;

use turnable_content::TmxLoader;
use turnable_core::{
    CharacterManager, PathFinder, TileMap, TransitionPointManager, Viewport, ViewportSize,
};

pub use setup::LevelSetup;

use crate::error::{LevelError, Result};
use crate::world::World;

#[derive(Debug)]
pub struct Level {
    world: Arc<World>,
    map: Option<TileMap>,
    character_manager: Option<CharacterManager>,
    path_finder: Option<PathFinder>,
    transition_point_manager: Option<TransitionPointManager>,
    viewport: Option<Viewport>,
}

impl Level {
    /// Creates a blank level bound to `world`.
    pub fn new(world: Arc<World>) -> Self {
        Self {
            world,
            map: None,
            character_manager: None,
            path_finder: None,
            transition_point_manager: None,
            viewport: None,
        }
    }

    pub fn world(&self) -> &Arc<World> {
        &self.world
    }

    pub fn map(&self) -> Option<&TileMap> {
        self.map.as_ref()
    }

    pub fn character_manager(&self) -> Option<&CharacterManager> {
        self.character_manager.as_ref()
    }

    pub fn character_manager_mut(&mut self) -> Option<&mut CharacterManager> {
        self.character_manager.as_mut()
    }

    pub fn path_finder(&self) -> Option<&PathFinder> {
        self.path_finder.as_ref()
    }

    pub fn transition_point_manager(&self) -> Option<&TransitionPointManager> {
        self.transition_point_manager.as_ref()
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut Viewport> {
        self.viewport.as_mut()
    }

    /// Installs an already loaded map.
    ///
    /// Characters and pathfinder derived from a previous map are discarded;
    /// transition points are read from the new map's transitions group.
    pub fn set_map(&mut self, map: TileMap) {
        let config = self.world.config();
        self.transition_point_manager = map
            .object_group(&config.transitions_layer)
            .map(|group| TransitionPointManager::from_group(group, &config.destination_property));
        self.character_manager = None;
        self.path_finder = None;
        self.map = Some(map);
    }

    fn build_characters(&self) -> Result<CharacterManager> {
        let map = self.map.as_ref().ok_or(LevelError::MapNotLoaded)?;
        let config = self.world.config();
        let layer = map
            .layer(&config.characters_layer)
            .ok_or_else(|| LevelError::LayerNotFound(config.characters_layer.clone()))?;

        Ok(CharacterManager::from_layer(
            map,
            layer,
            &config.player_property,
        ))
    }

    fn build_path_finder(&self, allow_diagonal_movement: bool) -> PathFinder {
        let Some(map) = &self.map else {
            return PathFinder::new(allow_diagonal_movement);
        };

        let obstacles = &self.world.config().obstacles_layer;
        if map.layer(obstacles).is_none() {
            tracing::warn!(
                "Map has no '{}' layer; every tile is walkable",
                obstacles
            );
        }
        PathFinder::from_map(map, obstacles, allow_diagonal_movement)
    }
}

impl LevelSetup for Level {
    fn set_up_map(&mut self, path: &Path) -> Result<()> {
        let map = TmxLoader::load(path)?;
        tracing::info!(
            "Loaded map {} ({}x{}) for world '{}'",
            path.display(),
            map.dimensions().width,
            map.dimensions().height,
            self.world.name()
        );
        self.set_map(map);
        Ok(())
    }

    fn set_up_characters(&mut self) -> Result<()> {
        let characters = self.build_characters()?;
        tracing::debug!(
            "Placed {} characters (player: {})",
            characters.len(),
            characters.player().is_some()
        );
        self.character_manager = Some(characters);
        Ok(())
    }

    fn set_up_pathfinder(&mut self, allow_diagonal_movement: bool) -> Result<()> {
        self.path_finder = Some(self.build_path_finder(allow_diagonal_movement));
        Ok(())
    }

    fn set_up_viewport(&mut self, size: ViewportSize) -> Result<()> {
        let mut viewport = Viewport::with_size(size);
        let player = self
            .character_manager
            .as_ref()
            .and_then(|characters| characters.player());
        if let (Some(map), Some(player)) = (&self.map, player) {
            viewport.center_on(player.position, map.dimensions());
        }
        self.viewport = Some(viewport);
        Ok(())
    }

    fn map_mut(&mut self) -> Option<&mut TileMap> {
        self.map.as_mut()
    }

    fn layer_changed(&mut self, layer_name: &str) -> Result<()> {
        let config = self.world.config();
        if layer_name == config.characters_layer && self.character_manager.is_some() {
            self.character_manager = Some(self.build_characters()?);
        }
        if layer_name == config.obstacles_layer {
            let allow = self.path_finder.as_ref().map(PathFinder::allow_diagonal_movement);
            if let Some(allow) = allow {
                self.path_finder = Some(self.build_path_finder(allow));
            }
        }
        Ok(())
    }
}
