//! Owning context for levels.

use turnable_core::LevelConfig;

/// Simulation context a level belongs to.
///
/// Levels hold their world behind an `Arc` and compare it by identity
/// (`Arc::ptr_eq`); the world itself only carries the conventions used to
/// read maps.
#[derive(Clone, Debug, Default)]
pub struct World {
    name: String,
    config: LevelConfig,
}

impl World {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, LevelConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: LevelConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }
}
