use crate::params::ViewportSize;

/// Level construction configuration: which map layers and properties carry meaning.
///
/// Tiled maps are free-form, so the level pipeline relies on naming conventions to
/// locate the character roster, walkability data and transition points.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelConfig {
    /// Tile layer whose occupied tiles become characters.
    pub characters_layer: String,
    /// Tile layer whose occupied tiles block movement.
    pub obstacles_layer: String,
    /// Object group whose objects become transition points.
    pub transitions_layer: String,
    /// Boolean tile property marking the player character's tile.
    pub player_property: String,
    /// Object property naming the level a transition point leads to.
    pub destination_property: String,
    /// Viewport size used by callers that do not pick one.
    pub default_viewport: ViewportSize,
}

impl LevelConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CHARACTERS_LAYER: &'static str = "Characters";
    pub const DEFAULT_OBSTACLES_LAYER: &'static str = "Obstacles";
    pub const DEFAULT_TRANSITIONS_LAYER: &'static str = "Transitions";
    pub const DEFAULT_PLAYER_PROPERTY: &'static str = "IsPlayer";
    pub const DEFAULT_DESTINATION_PROPERTY: &'static str = "Destination";
    pub const DEFAULT_VIEWPORT: ViewportSize = ViewportSize::new(16, 16);

    pub fn new() -> Self {
        Self {
            characters_layer: Self::DEFAULT_CHARACTERS_LAYER.to_owned(),
            obstacles_layer: Self::DEFAULT_OBSTACLES_LAYER.to_owned(),
            transitions_layer: Self::DEFAULT_TRANSITIONS_LAYER.to_owned(),
            player_property: Self::DEFAULT_PLAYER_PROPERTY.to_owned(),
            destination_property: Self::DEFAULT_DESTINATION_PROPERTY.to_owned(),
            default_viewport: Self::DEFAULT_VIEWPORT,
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::new()
    }
}
