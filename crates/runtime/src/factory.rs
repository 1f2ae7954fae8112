//! Level construction.
//!
//! A [`LevelFactory`] builds blank levels, initializes them from
//! [`LevelInitializationParams`] and optionally randomizes them from
//! [`LevelRandomizationParams`]. The composite builders are provided methods,
//! so every factory runs the steps in the same order: initialize strictly
//! before randomize.

use std::sync::Arc;

use turnable_core::{LevelInitializationParams, LevelRandomizationParams};

use crate::error::{LevelError, Result};
use crate::level::{Level, LevelSetup};
use crate::randomizer::{LevelRandomizer, TileRandomizer};
use crate::world::World;

pub trait LevelFactory {
    /// Returns a blank level bound to `world`.
    fn build_level(&self, world: Arc<World>) -> Level;

    /// Runs the setup steps selected by `params` on `level`.
    fn initialize(&self, level: &mut dyn LevelSetup, params: &LevelInitializationParams)
    -> Result<()>;

    /// Scatters random tiles as described by `params`.
    fn randomize(&self, level: &mut dyn LevelSetup, params: &LevelRandomizationParams)
    -> Result<()>;

    /// Blank level followed by [`initialize`](Self::initialize). Never randomizes.
    fn build_initialized_level(
        &self,
        world: Arc<World>,
        params: &LevelInitializationParams,
    ) -> Result<Level> {
        let mut level = self.build_level(world);
        self.initialize(&mut level, params)?;
        Ok(level)
    }

    /// Initialized level followed by [`randomize`](Self::randomize).
    fn build_randomized_level(
        &self,
        world: Arc<World>,
        initialization: &LevelInitializationParams,
        randomization: &LevelRandomizationParams,
    ) -> Result<Level> {
        let mut level = self.build_initialized_level(world, initialization)?;
        self.randomize(&mut level, randomization)?;
        Ok(level)
    }
}

/// Factory for levels backed by Tiled maps.
///
/// Holds no per-level state; the randomizer is shared and read-only.
#[derive(Clone)]
pub struct TiledLevelFactory {
    randomizer: Arc<dyn LevelRandomizer>,
}

impl TiledLevelFactory {
    /// Factory using [`TileRandomizer`].
    pub fn new() -> Self {
        Self::with_randomizer(Arc::new(TileRandomizer::new()))
    }

    pub fn with_randomizer(randomizer: Arc<dyn LevelRandomizer>) -> Self {
        Self { randomizer }
    }

    pub fn randomizer(&self) -> &Arc<dyn LevelRandomizer> {
        &self.randomizer
    }
}

impl Default for TiledLevelFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelFactory for TiledLevelFactory {
    fn build_level(&self, world: Arc<World>) -> Level {
        Level::new(world)
    }

    fn initialize(
        &self,
        level: &mut dyn LevelSetup,
        params: &LevelInitializationParams,
    ) -> Result<()> {
        // A failed map setup aborts before the pathfinder is touched.
        if let Some(path) = &params.tmx_path {
            tracing::debug!("Setting up map {}", path.display());
            level.set_up_map(path)?;
            level.set_up_characters()?;
        }

        tracing::debug!(
            "Setting up pathfinder (diagonal: {})",
            params.allow_diagonal_movement
        );
        level.set_up_pathfinder(params.allow_diagonal_movement)?;

        if let Some(size) = params.viewport {
            level.set_up_viewport(size)?;
        }
        Ok(())
    }

    fn randomize(
        &self,
        level: &mut dyn LevelSetup,
        params: &LevelRandomizationParams,
    ) -> Result<()> {
        let layer_name = params
            .layer_name
            .as_deref()
            .ok_or(LevelError::InvalidRandomization {
                reason: "layer_name is required",
            })?;
        let tile_count = params
            .tile_count
            .ok_or(LevelError::InvalidRandomization {
                reason: "tile_count is required",
            })?;

        match params.tile_maximum {
            None => self.randomizer.randomize(level, layer_name, tile_count),
            Some(tile_maximum) => {
                // Callers give an inclusive maximum; randomizers take an exclusive one.
                let exclusive = tile_maximum
                    .checked_add(1)
                    .ok_or(LevelError::InvalidRandomization {
                        reason: "tile_maximum is out of range",
                    })?;
                self.randomizer
                    .randomize_with_maximum(level, layer_name, tile_count, exclusive)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use super::*;
    use turnable_content::MapLoadError;
    use turnable_core::{TileMap, ViewportSize};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum SetupCall {
        Map(PathBuf),
        Characters,
        Pathfinder(bool),
        Viewport(ViewportSize),
    }

    /// Records every setup call; map setup fails when `fail_map` is set.
    #[derive(Default)]
    struct RecordingLevel {
        calls: Vec<SetupCall>,
        fail_map: bool,
    }

    impl LevelSetup for RecordingLevel {
        fn set_up_map(&mut self, path: &Path) -> Result<()> {
            self.calls.push(SetupCall::Map(path.to_path_buf()));
            if self.fail_map {
                return Err(MapLoadError::NotFound(path.to_path_buf()).into());
            }
            Ok(())
        }

        fn set_up_characters(&mut self) -> Result<()> {
            self.calls.push(SetupCall::Characters);
            Ok(())
        }

        fn set_up_pathfinder(&mut self, allow_diagonal_movement: bool) -> Result<()> {
            self.calls.push(SetupCall::Pathfinder(allow_diagonal_movement));
            Ok(())
        }

        fn set_up_viewport(&mut self, size: ViewportSize) -> Result<()> {
            self.calls.push(SetupCall::Viewport(size));
            Ok(())
        }

        fn map_mut(&mut self) -> Option<&mut TileMap> {
            None
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct RandomizeCall {
        layer: String,
        tile_count: usize,
        exclusive_maximum: Option<u32>,
    }

    #[derive(Default)]
    struct RecordingRandomizer {
        calls: Mutex<Vec<RandomizeCall>>,
    }

    impl RecordingRandomizer {
        fn calls(&self) -> Vec<RandomizeCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl LevelRandomizer for RecordingRandomizer {
        fn randomize(
            &self,
            _level: &mut dyn LevelSetup,
            layer_name: &str,
            tile_count: usize,
        ) -> Result<()> {
            self.calls.lock().unwrap().push(RandomizeCall {
                layer: layer_name.to_owned(),
                tile_count,
                exclusive_maximum: None,
            });
            Ok(())
        }

        fn randomize_with_maximum(
            &self,
            _level: &mut dyn LevelSetup,
            layer_name: &str,
            tile_count: usize,
            exclusive_tile_maximum: u32,
        ) -> Result<()> {
            self.calls.lock().unwrap().push(RandomizeCall {
                layer: layer_name.to_owned(),
                tile_count,
                exclusive_maximum: Some(exclusive_tile_maximum),
            });
            Ok(())
        }
    }

    fn recording_factory() -> (TiledLevelFactory, Arc<RecordingRandomizer>) {
        let randomizer = Arc::new(RecordingRandomizer::default());
        let factory = TiledLevelFactory::with_randomizer(randomizer.clone());
        (factory, randomizer)
    }

    fn world() -> Arc<World> {
        Arc::new(World::new("test"))
    }

    #[test]
    fn blank_level_only_has_world() {
        let world = world();
        let level = TiledLevelFactory::new().build_level(Arc::clone(&world));

        assert!(Arc::ptr_eq(level.world(), &world));
        assert!(level.map().is_none());
        assert!(level.character_manager().is_none());
        assert!(level.path_finder().is_none());
        assert!(level.transition_point_manager().is_none());
        assert!(level.viewport().is_none());
    }

    #[test]
    fn initialize_without_map_only_sets_up_pathfinder() {
        let (factory, _) = recording_factory();

        for allow in [false, true] {
            let mut level = RecordingLevel::default();
            let params = LevelInitializationParams::new().with_diagonal_movement(allow);
            factory.initialize(&mut level, &params).unwrap();

            assert_eq!(level.calls, [SetupCall::Pathfinder(allow)]);
        }
    }

    #[test]
    fn initialize_with_map_runs_all_steps_in_order() {
        let (factory, _) = recording_factory();
        let mut level = RecordingLevel::default();
        let params = LevelInitializationParams::new()
            .with_tmx_path("maps/cellar.tmx")
            .with_diagonal_movement(true);

        factory.initialize(&mut level, &params).unwrap();

        assert_eq!(
            level.calls,
            [
                SetupCall::Map(PathBuf::from("maps/cellar.tmx")),
                SetupCall::Characters,
                SetupCall::Pathfinder(true),
            ]
        );
    }

    #[test]
    fn initialize_sets_up_viewport_last_when_requested() {
        let (factory, _) = recording_factory();
        let mut level = RecordingLevel::default();
        let params = LevelInitializationParams::new().with_viewport(ViewportSize::new(20, 12));

        factory.initialize(&mut level, &params).unwrap();

        assert_eq!(
            level.calls,
            [
                SetupCall::Pathfinder(false),
                SetupCall::Viewport(ViewportSize::new(20, 12)),
            ]
        );
    }

    #[test]
    fn failed_map_setup_aborts_initialization() {
        let (factory, _) = recording_factory();
        let mut level = RecordingLevel {
            fail_map: true,
            ..Default::default()
        };
        let params = LevelInitializationParams::new().with_tmx_path("missing.tmx");

        let err = factory.initialize(&mut level, &params).unwrap_err();

        assert!(matches!(err, LevelError::MapLoad(MapLoadError::NotFound(_))));
        assert_eq!(level.calls, [SetupCall::Map(PathBuf::from("missing.tmx"))]);
    }

    #[test]
    fn randomize_requires_layer_and_count() {
        let (factory, randomizer) = recording_factory();
        let mut level = RecordingLevel::default();

        let cases = [
            LevelRandomizationParams::new(),
            LevelRandomizationParams::new().with_tile_count(5),
            LevelRandomizationParams::new().with_layer_name("Characters"),
        ];
        for params in cases {
            let err = factory.randomize(&mut level, &params).unwrap_err();
            assert!(matches!(err, LevelError::InvalidRandomization { .. }));
        }

        assert!(randomizer.calls().is_empty());
        assert!(level.calls.is_empty());
    }

    #[test]
    fn randomize_without_maximum_uses_randomizer_default() {
        let (factory, randomizer) = recording_factory();
        let mut level = RecordingLevel::default();
        let params = LevelRandomizationParams::new()
            .with_layer_name("Characters")
            .with_tile_count(5);

        factory.randomize(&mut level, &params).unwrap();

        assert_eq!(
            randomizer.calls(),
            [RandomizeCall {
                layer: "Characters".into(),
                tile_count: 5,
                exclusive_maximum: None,
            }]
        );
    }

    #[test]
    fn randomize_passes_exclusive_maximum() {
        let (factory, randomizer) = recording_factory();
        let mut level = RecordingLevel::default();
        let params = LevelRandomizationParams::new()
            .with_layer_name("Characters")
            .with_tile_count(5)
            .with_tile_maximum(10);

        factory.randomize(&mut level, &params).unwrap();

        assert_eq!(
            randomizer.calls(),
            [RandomizeCall {
                layer: "Characters".into(),
                tile_count: 5,
                exclusive_maximum: Some(11),
            }]
        );
    }

    #[test]
    fn randomize_rejects_unrepresentable_maximum() {
        let (factory, randomizer) = recording_factory();
        let mut level = RecordingLevel::default();
        let params = LevelRandomizationParams::new()
            .with_layer_name("Characters")
            .with_tile_count(1)
            .with_tile_maximum(u32::MAX);

        assert!(factory.randomize(&mut level, &params).is_err());
        assert!(randomizer.calls().is_empty());
    }

    #[test]
    fn zero_tile_count_is_forwarded() {
        let (factory, randomizer) = recording_factory();
        let mut level = RecordingLevel::default();
        let params = LevelRandomizationParams::new()
            .with_layer_name("Obstacles")
            .with_tile_count(0);

        factory.randomize(&mut level, &params).unwrap();
        assert_eq!(randomizer.calls()[0].tile_count, 0);
    }

    #[derive(Debug, Clone, PartialEq)]
    enum FactoryCall {
        Initialize(LevelInitializationParams),
        Randomize(LevelRandomizationParams),
    }

    /// Factory whose steps only record, to observe the provided builders.
    #[derive(Default)]
    struct RecordingFactory {
        calls: RefCell<Vec<FactoryCall>>,
    }

    impl LevelFactory for RecordingFactory {
        fn build_level(&self, world: Arc<World>) -> Level {
            Level::new(world)
        }

        fn initialize(
            &self,
            _level: &mut dyn LevelSetup,
            params: &LevelInitializationParams,
        ) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(FactoryCall::Initialize(params.clone()));
            Ok(())
        }

        fn randomize(
            &self,
            _level: &mut dyn LevelSetup,
            params: &LevelRandomizationParams,
        ) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(FactoryCall::Randomize(params.clone()));
            Ok(())
        }
    }

    #[test]
    fn initialized_build_never_randomizes() {
        let factory = RecordingFactory::default();
        let world = world();
        let init = LevelInitializationParams::new().with_tmx_path("a.tmx");

        let level = factory
            .build_initialized_level(Arc::clone(&world), &init)
            .unwrap();

        assert!(Arc::ptr_eq(level.world(), &world));
        assert_eq!(*factory.calls.borrow(), [FactoryCall::Initialize(init)]);
    }

    #[test]
    fn randomized_build_initializes_first() {
        let factory = RecordingFactory::default();
        let init = LevelInitializationParams::new().with_diagonal_movement(true);
        let random = LevelRandomizationParams::new()
            .with_layer_name("Characters")
            .with_tile_count(5);

        factory
            .build_randomized_level(world(), &init, &random)
            .unwrap();

        assert_eq!(
            *factory.calls.borrow(),
            [FactoryCall::Initialize(init), FactoryCall::Randomize(random)]
        );
    }

    #[test]
    fn factory_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TiledLevelFactory>();
    }
}
