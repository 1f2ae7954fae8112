//! Content loaders for reading level data from files.
//!
//! Maps come from Tiled `.tmx` files; level configuration and build requests
//! come from TOML (requests may also be written in RON).

pub mod config;
pub mod factory;
pub mod request;
pub mod tmx;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use request::{LevelRequest, RequestLoader};
pub use tmx::{MapLoadError, TmxLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
