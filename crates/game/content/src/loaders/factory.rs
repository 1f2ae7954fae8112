//! Content factory for locating level data files.

use std::path::{Path, PathBuf};

use turnable_core::{LevelConfig, TileMap};

use crate::loaders::{ConfigLoader, LevelRequest, LoadResult, RequestLoader, TmxLoader};

/// Content factory that loads level content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── maps/
/// │   ├── cellar.tmx
/// │   └── tiles.tsx
/// └── levels/
///     ├── cellar.toml
///     └── arena.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load level configuration from `config.toml`, or defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<LevelConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(LevelConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Path of `maps/{map_name}.tmx`.
    pub fn map_path(&self, map_name: &str) -> PathBuf {
        self.data_dir.join("maps").join(format!("{}.tmx", map_name))
    }

    /// Load a map from `maps/{map_name}.tmx`.
    ///
    /// # Arguments
    ///
    /// * `map_name` - Map file name without the `.tmx` extension
    ///
    /// # Returns
    ///
    /// Returns the converted TileMap. A missing or malformed file surfaces as
    /// a [`MapLoadError`](crate::MapLoadError) inside the error chain.
    pub fn load_map(&self, map_name: &str) -> LoadResult<TileMap> {
        Ok(TmxLoader::load(&self.map_path(map_name))?)
    }

    /// Load a build request from `levels/{level_name}.toml` or `levels/{level_name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `level_name` - Request file name without extension
    ///
    /// # Returns
    ///
    /// Returns the LevelRequest, preferring the TOML file when both exist.
    pub fn load_request(&self, level_name: &str) -> LoadResult<LevelRequest> {
        let levels = self.data_dir.join("levels");
        let toml = levels.join(format!("{}.toml", level_name));
        if toml.exists() {
            return RequestLoader::load(&toml);
        }
        RequestLoader::load(&levels.join(format!("{}.ron", level_name)))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
