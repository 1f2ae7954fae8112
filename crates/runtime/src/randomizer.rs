//! Strategies that scatter random tiles over a level's map.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use turnable_core::{Position, TileGid};

use crate::error::{LevelError, Result};
use crate::level::LevelSetup;

/// Randomization strategy used by [`LevelFactory::randomize`](crate::LevelFactory::randomize).
///
/// Implementations hold no per-level state, so one instance can be shared by
/// every factory.
pub trait LevelRandomizer: Send + Sync {
    /// Places `tile_count` random tiles on `layer_name` using the strategy's
    /// default tile range.
    fn randomize(&self, level: &mut dyn LevelSetup, layer_name: &str, tile_count: usize)
    -> Result<()>;

    /// Places `tile_count` random tiles on `layer_name` with gids drawn from
    /// `1..exclusive_tile_maximum`.
    fn randomize_with_maximum(
        &self,
        level: &mut dyn LevelSetup,
        layer_name: &str,
        tile_count: usize,
        exclusive_tile_maximum: TileGid,
    ) -> Result<()>;
}

/// Default strategy: fills distinct empty tiles with uniformly drawn gids.
///
/// Without an explicit maximum every gid of the map's tilesets is a candidate
/// (`1..=map.tile_count()`).
#[derive(Clone, Debug, Default)]
pub struct TileRandomizer {
    seed: Option<u64>,
}

impl TileRandomizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call replays the same sequence for the same layer contents.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl LevelRandomizer for TileRandomizer {
    fn randomize(
        &self,
        level: &mut dyn LevelSetup,
        layer_name: &str,
        tile_count: usize,
    ) -> Result<()> {
        let map = level.map_mut().ok_or(LevelError::MapNotLoaded)?;
        let exclusive_tile_maximum = map.tile_count().saturating_add(1);
        self.randomize_with_maximum(level, layer_name, tile_count, exclusive_tile_maximum)
    }

    fn randomize_with_maximum(
        &self,
        level: &mut dyn LevelSetup,
        layer_name: &str,
        tile_count: usize,
        exclusive_tile_maximum: TileGid,
    ) -> Result<()> {
        if exclusive_tile_maximum <= 1 {
            return Err(LevelError::InvalidTileRange {
                exclusive_maximum: exclusive_tile_maximum,
            });
        }

        let map = level.map_mut().ok_or(LevelError::MapNotLoaded)?;
        let layer = map
            .layer_mut(layer_name)
            .ok_or_else(|| LevelError::LayerNotFound(layer_name.to_owned()))?;

        let empty = layer.empty_positions();
        if empty.len() < tile_count {
            return Err(LevelError::InsufficientSpace {
                layer: layer_name.to_owned(),
                requested: tile_count,
                available: empty.len(),
            });
        }

        let mut rng = self.rng();
        let targets: Vec<Position> = empty.choose_multiple(&mut rng, tile_count).copied().collect();
        for position in targets {
            layer.set_tile(position, rng.gen_range(1..exclusive_tile_maximum));
        }

        tracing::debug!(
            "Randomized {} tiles on '{}' (gids 1..{})",
            tile_count,
            layer_name,
            exclusive_tile_maximum
        );
        level.layer_changed(layer_name)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{Level, World};
    use turnable_core::{MapDimensions, TileLayer, TileMap, TileSize};

    fn level_with_layer(width: u32, height: u32, tile_count: u32) -> Level {
        let dims = MapDimensions::new(width, height);
        let mut map = TileMap::new(dims, TileSize::new(16, 16));
        map.set_tile_count(tile_count);
        map.push_layer(TileLayer::new("Characters", dims));

        let mut level = Level::new(Arc::new(World::new("test")));
        level.set_map(map);
        level
    }

    fn characters(level: &Level) -> &TileLayer {
        level.map().unwrap().layer("Characters").unwrap()
    }

    #[test]
    fn places_exact_count_within_range() {
        let mut level = level_with_layer(6, 6, 20);
        TileRandomizer::new()
            .randomize_with_maximum(&mut level, "Characters", 5, 11)
            .unwrap();

        let layer = characters(&level);
        assert_eq!(layer.tile_count(), 5);
        assert!(layer.occupied().all(|(_, gid)| (1..11).contains(&gid)));
    }

    #[test]
    fn default_range_covers_map_tilesets() {
        let mut level = level_with_layer(4, 4, 3);
        TileRandomizer::new()
            .randomize(&mut level, "Characters", 16)
            .unwrap();

        let layer = characters(&level);
        assert_eq!(layer.tile_count(), 16);
        assert!(layer.occupied().all(|(_, gid)| (1..=3).contains(&gid)));
    }

    #[test]
    fn only_empty_tiles_are_filled() {
        let mut level = level_with_layer(3, 1, 9);
        level
            .map_mut()
            .unwrap()
            .layer_mut("Characters")
            .unwrap()
            .set_tile(Position::new(1, 0), 42);

        TileRandomizer::new()
            .randomize(&mut level, "Characters", 2)
            .unwrap();

        let layer = characters(&level);
        assert_eq!(layer.tile(Position::new(1, 0)), Some(42));
        assert_eq!(layer.tile_count(), 3);
    }

    #[test]
    fn seeded_randomizer_is_reproducible() {
        let randomizer = TileRandomizer::with_seed(7);
        let mut first = level_with_layer(8, 8, 12);
        let mut second = level_with_layer(8, 8, 12);

        randomizer.randomize(&mut first, "Characters", 10).unwrap();
        randomizer.randomize(&mut second, "Characters", 10).unwrap();

        assert_eq!(characters(&first), characters(&second));
    }

    #[test]
    fn insufficient_space_leaves_layer_untouched() {
        let mut level = level_with_layer(2, 2, 5);
        let err = TileRandomizer::new()
            .randomize(&mut level, "Characters", 5)
            .unwrap_err();

        assert!(matches!(
            err,
            LevelError::InsufficientSpace {
                requested: 5,
                available: 4,
                ..
            }
        ));
        assert_eq!(characters(&level).tile_count(), 0);
    }

    #[test]
    fn rejects_empty_tile_range() {
        let mut level = level_with_layer(2, 2, 5);
        let err = TileRandomizer::new()
            .randomize_with_maximum(&mut level, "Characters", 1, 1)
            .unwrap_err();
        assert!(matches!(
            err,
            LevelError::InvalidTileRange {
                exclusive_maximum: 1
            }
        ));
    }

    #[test]
    fn missing_map_or_layer_is_reported() {
        let mut blank = Level::new(Arc::new(World::new("test")));
        assert!(matches!(
            TileRandomizer::new().randomize(&mut blank, "Characters", 1),
            Err(LevelError::MapNotLoaded)
        ));

        let mut level = level_with_layer(2, 2, 5);
        assert!(matches!(
            TileRandomizer::new().randomize(&mut level, "Items", 1),
            Err(LevelError::LayerNotFound(name)) if name == "Items"
        ));
    }

    #[test]
    fn character_roster_tracks_randomized_layer() {
        let mut level = level_with_layer(5, 5, 4);
        level.set_up_characters().unwrap();
        assert_eq!(level.character_manager().unwrap().len(), 0);

        TileRandomizer::new()
            .randomize(&mut level, "Characters", 3)
            .unwrap();

        assert_eq!(level.character_manager().unwrap().len(), 3);
    }
}
