//! Errors raised while assembling a level.
//!
//! Failures from collaborators (map loading, character placement) are wrapped
//! so callers see one error type from factory and randomizer alike.
use thiserror::Error;
use turnable_content::MapLoadError;
use turnable_core::{ErrorContext, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, LevelError>;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("invalid randomization request: {reason}")]
    InvalidRandomization { reason: &'static str },

    #[error(transparent)]
    MapLoad(#[from] MapLoadError),

    #[error("level has no map loaded")]
    MapNotLoaded,

    #[error("layer '{0}' not found in map")]
    LayerNotFound(String),

    #[error("layer '{layer}' has {available} empty tiles, {requested} requested")]
    InsufficientSpace {
        layer: String,
        requested: usize,
        available: usize,
    },

    #[error("exclusive tile maximum {exclusive_maximum} leaves no valid tile ids")]
    InvalidTileRange { exclusive_maximum: u32 },
}

impl GameError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidRandomization { .. } | Self::InvalidTileRange { .. } => {
                ErrorSeverity::Validation
            }
            Self::MapLoad(err) => err.severity(),
            Self::MapNotLoaded | Self::LayerNotFound(_) => ErrorSeverity::Validation,
            Self::InsufficientSpace { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            Self::LayerNotFound(layer) => Some(ErrorContext::new().with_layer(layer.as_str())),
            Self::InsufficientSpace { layer, .. } => Some(
                ErrorContext::new()
                    .with_layer(layer.as_str())
                    .with_message("not enough empty tiles"),
            ),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRandomization { .. } => "LEVEL_INVALID_RANDOMIZATION",
            Self::MapLoad(err) => err.error_code(),
            Self::MapNotLoaded => "LEVEL_MAP_NOT_LOADED",
            Self::LayerNotFound(_) => "LEVEL_LAYER_NOT_FOUND",
            Self::InsufficientSpace { .. } => "LEVEL_INSUFFICIENT_SPACE",
            Self::InvalidTileRange { .. } => "LEVEL_INVALID_TILE_RANGE",
        }
    }
}
