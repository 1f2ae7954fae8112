//! Level build request loader.
//!
//! A request file bundles the parameters for one level build:
//!
//! ```toml
//! [initialization]
//! tmx_path = "maps/cellar.tmx"
//! allow_diagonal_movement = true
//!
//! [randomization]
//! layer_name = "Characters"
//! tile_count = 5
//! ```
//!
//! `.ron` files carry the same structure in RON syntax. A relative `tmx_path`
//! is resolved against the request file's directory.

use std::path::Path;

use serde::{Deserialize, Serialize};
use turnable_core::{LevelInitializationParams, LevelRandomizationParams};

use crate::loaders::{LoadResult, read_file};

/// Parameters for building one level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelRequest {
    pub initialization: LevelInitializationParams,
    /// Present only when the level should be randomized after initialization.
    pub randomization: Option<LevelRandomizationParams>,
}

/// Loader for level requests from TOML or RON files.
pub struct RequestLoader;

impl RequestLoader {
    /// Load a request, choosing the format by file extension.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.toml` or `.ron` request file
    ///
    /// # Returns
    ///
    /// Returns a LevelRequest whose relative `tmx_path` is already joined to
    /// the request file's directory.
    pub fn load(path: &Path) -> LoadResult<LevelRequest> {
        let content = read_file(path)?;
        let mut request = match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => ron::from_str::<LevelRequest>(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse request RON: {}", e))?,
            Some("toml") => toml::from_str::<LevelRequest>(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse request TOML: {}", e))?,
            _ => anyhow::bail!(
                "Unsupported request format {} (expected .toml or .ron)",
                path.display()
            ),
        };

        if let (Some(tmx_path), Some(base)) = (&request.initialization.tmx_path, path.parent()) {
            if tmx_path.is_relative() {
                request.initialization.tmx_path = Some(base.join(tmx_path));
            }
        }

        Ok(request)
    }
}
