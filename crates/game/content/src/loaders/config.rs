//! Level configuration loader.

use std::path::Path;

use turnable_core::LevelConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for level configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing LevelConfig
    ///
    /// # Returns
    ///
    /// Returns a LevelConfig. Missing keys fall back to [`LevelConfig::default`].
    pub fn load(path: &Path) -> LoadResult<LevelConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<LevelConfig> {
        let config: LevelConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnable_core::ViewportSize;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, LevelConfig::default());
    }

    #[test]
    fn overrides_layer_names_and_viewport() {
        let config = ConfigLoader::parse(
            r#"
characters_layer = "Actors"
player_property = "Hero"

[default_viewport]
width = 24
height = 12
"#,
        )
        .unwrap();

        assert_eq!(config.characters_layer, "Actors");
        assert_eq!(config.player_property, "Hero");
        assert_eq!(config.obstacles_layer, "Obstacles");
        assert_eq!(config.default_viewport, ViewportSize::new(24, 12));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ConfigLoader::parse("characters_layer = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
