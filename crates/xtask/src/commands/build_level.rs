//! Build a level and summarize the result
//!
//! Runs the same factory path a game would: blank level, initialization from
//! a Tiled map, then optional randomization of one tile layer.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::sync::Arc;

use turnable_content::{ContentFactory, LevelRequest};
use turnable_core::{
    GameError, LevelConfig, LevelInitializationParams, LevelRandomizationParams, ViewportSize,
};
use turnable_runtime::{Level, LevelFactory, TileRandomizer, TiledLevelFactory, World};

use crate::dirs;

/// Build a level through the level factory
#[derive(Parser)]
pub struct BuildLevel {
    /// Level request under <data-dir>/levels (without extension)
    #[arg(short, long, value_name = "NAME", conflicts_with = "tmx")]
    level: Option<String>,

    /// Tiled map to load (skips map and character setup when omitted)
    #[arg(long, value_name = "FILE")]
    tmx: Option<PathBuf>,

    /// Allow diagonal movement in the pathfinder (overrides the request file)
    #[arg(long)]
    diagonal: bool,

    /// Viewport size, e.g. 16x16 (defaults to the config's default_viewport)
    #[arg(long, value_name = "WxH", value_parser = parse_viewport)]
    viewport: Option<ViewportSize>,

    /// Tile layer to randomize
    #[arg(long, value_name = "LAYER")]
    layer: Option<String>,

    /// Number of tiles to randomize
    #[arg(long, value_name = "N")]
    count: Option<usize>,

    /// Largest tile id to place (inclusive)
    #[arg(long, value_name = "GID")]
    max: Option<u32>,

    /// Fixed seed for reproducible randomization
    #[arg(long)]
    seed: Option<u64>,

    /// Custom data directory (defaults to TURNABLE_DATA_DIR or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl BuildLevel {
    pub fn execute(self) -> Result<()> {
        let content = ContentFactory::new(dirs::data_dir(self.data_dir.clone()));
        let config = content.load_config()?;
        let request = self.request(&content, &config)?;
        let world = Arc::new(World::with_config("xtask", config));

        let factory = match self.seed {
            Some(seed) => {
                TiledLevelFactory::with_randomizer(Arc::new(TileRandomizer::with_seed(seed)))
            }
            None => TiledLevelFactory::new(),
        };

        let result = match &request.randomization {
            Some(randomization) => {
                factory.build_randomized_level(world, &request.initialization, randomization)
            }
            None => factory.build_initialized_level(world, &request.initialization),
        };

        let level = match result {
            Ok(level) => level,
            Err(err) => {
                println!(
                    "{} [{}] {} ({})",
                    style("Build failed:").bold().red(),
                    err.error_code(),
                    err,
                    err.severity().as_str()
                );
                return Err(err).context("Level build failed");
            }
        };

        print_summary(&level);
        Ok(())
    }

    /// Resolve the level request to build.
    ///
    /// # Arguments
    ///
    /// * `content` - Content factory used to find `--level` request files
    /// * `config` - Level conventions, supplying the fallback viewport size
    ///
    /// # Returns
    ///
    /// The request file when `--level` is given, otherwise one assembled from
    /// flags. `--diagonal`, `--viewport` and the randomization flags override
    /// what the file says. A request without a viewport gets
    /// `config.default_viewport`.
    fn request(&self, content: &ContentFactory, config: &LevelConfig) -> Result<LevelRequest> {
        let mut request = match &self.level {
            Some(name) => content
                .load_request(name)
                .with_context(|| format!("Failed to load level request '{}'", name))?,
            None => LevelRequest {
                initialization: LevelInitializationParams {
                    tmx_path: self.tmx.clone(),
                    ..Default::default()
                },
                randomization: None,
            },
        };

        let initialization = &mut request.initialization;
        if self.diagonal {
            initialization.allow_diagonal_movement = true;
        }
        initialization.viewport = self
            .viewport
            .or(initialization.viewport)
            .or(Some(config.default_viewport));

        if self.layer.is_some() || self.count.is_some() || self.max.is_some() {
            request.randomization = Some(LevelRandomizationParams {
                layer_name: self.layer.clone(),
                tile_count: self.count,
                tile_maximum: self.max,
            });
        }

        Ok(request)
    }
}

fn parse_viewport(value: &str) -> Result<ViewportSize, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", value))?;
    let width = width
        .trim()
        .parse()
        .map_err(|e| format!("invalid width '{}': {}", width, e))?;
    let height = height
        .trim()
        .parse()
        .map_err(|e| format!("invalid height '{}': {}", height, e))?;
    Ok(ViewportSize::new(width, height))
}

fn print_summary(level: &Level) {
    println!("{}", style("=== Level Summary ===").bold().green());
    println!("{} {}", style("World:").bold().cyan(), level.world().name());

    match level.map() {
        Some(map) => {
            let dims = map.dimensions();
            println!(
                "{} {}x{}, {} layers",
                style("Map:").bold().cyan(),
                dims.width,
                dims.height,
                map.layers().len()
            );
            for layer in map.layers() {
                println!("  {}: {} tiles", layer.name(), layer.tile_count());
            }
        }
        None => println!("{} none", style("Map:").bold().cyan()),
    }

    match level.character_manager() {
        Some(characters) => {
            println!(
                "{} {}",
                style("Characters:").bold().cyan(),
                characters.len()
            );
            for character in characters.characters() {
                let marker = if character.is_player { " (player)" } else { "" };
                println!(
                    "  #{} gid {} at {}{}",
                    character.id, character.tile, character.position, marker
                );
            }
        }
        None => println!("{} none", style("Characters:").bold().cyan()),
    }

    match level.path_finder() {
        Some(path_finder) => println!(
            "{} diagonal={}, blocked tiles={}",
            style("Pathfinder:").bold().cyan(),
            path_finder.allow_diagonal_movement(),
            path_finder
                .grid()
                .map(|grid| grid.blocked_count().to_string())
                .unwrap_or_else(|| "n/a".to_owned())
        ),
        None => println!("{} none", style("Pathfinder:").bold().cyan()),
    }

    if let Some(transitions) = level.transition_point_manager() {
        println!("{} {}", style("Transitions:").bold().cyan(), transitions.len());
        for point in transitions.points() {
            println!(
                "  {} at {} -> {}",
                point.name,
                point.position,
                point.destination.as_deref().unwrap_or("-")
            );
        }
    }

    if let Some(viewport) = level.viewport() {
        let size = viewport.size();
        println!(
            "{} {}x{} at {}",
            style("Viewport:").bold().cyan(),
            size.width,
            size.height,
            viewport.origin()
        );
    }
}
