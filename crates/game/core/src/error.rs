//! Shared error classification for the level pipeline.
//!
//! Each domain keeps its own `thiserror` enum next to the values it guards
//! (`StatError`, `PropertyError`, `CharacterError`); loader and orchestration
//! errors live in `turnable-content` and `turnable-runtime`. All of them
//! implement [`GameError`] so callers can triage failures uniformly.

use crate::position::Position;

/// How a caller should react to a failed level operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Another attempt with different input may succeed (a full layer, an
    /// occupied tile).
    Recoverable,
    /// The request itself is malformed and must be fixed first.
    Validation,
    /// Derived level data disagrees with its source.
    Internal,
    /// The level cannot be assembled at all, e.g. its map is unreadable.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// True for severities that point at broken data rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Where a failure happened, when the error knows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorContext {
    pub layer: Option<String>,
    pub position: Option<Position>,
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layer: None,
            position: None,
            message: None,
        }
    }

    #[must_use]
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Uniform triage surface implemented by every error enum in the workspace.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Layer or position involved, if the variant records one.
    fn context(&self) -> Option<ErrorContext> {
        None
    }

    /// Stable identifier for the variant, suitable for logs and tooling.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
