//! Data directory resolution
//!
//! Level content lives in a data directory (see `ContentFactory`). The
//! location is taken from, in order:
//! 1. `--data-dir` on the command line
//! 2. the `TURNABLE_DATA_DIR` environment variable (also read from `.env`)
//! 3. the platform data directory

use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "TURNABLE_DATA_DIR";

/// Get the platform-specific data directory for turnable
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/turnable`
/// - Linux: `~/.local/share/turnable` (or `$XDG_DATA_HOME/turnable`)
/// - Windows: `%APPDATA%\turnable`
/// - Fallback: `./data`
pub fn platform_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "turnable")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

/// Resolve the data directory, preferring an explicit override.
pub fn data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(platform_data_dir)
}
