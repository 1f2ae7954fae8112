use std::fmt;

use crate::error::{ErrorSeverity, GameError};

/// Identifier assigned to a stat by its [`StatManager`](super::StatManager).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatId(pub u32);

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stat#{}", self.0)
    }
}

/// Inclusive value range of a stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBounds {
    pub min: i32,
    pub max: i32,
}

impl StatBounds {
    /// Range used when a stat is built without explicit bounds.
    pub const DEFAULT: Self = Self { min: 0, max: 100 };

    pub fn new(min: i32, max: i32) -> Result<Self, StatError> {
        if min > max {
            return Err(StatError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

impl Default for StatBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatError {
    #[error("stat bounds are inverted: min {min} > max {max}")]
    InvalidBounds { min: i32, max: i32 },
}

impl GameError for StatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBounds { .. } => "STAT_INVALID_BOUNDS",
        }
    }
}

/// Notification payload sent when a stat's value actually changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatChanged {
    pub stat: StatId,
    pub name: String,
    pub old_value: i32,
    pub new_value: i32,
}

/// Handle returned by [`Stat::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&StatChanged) + Send>;

/// Named integer clamped to [`StatBounds`], with change notification.
pub struct Stat {
    id: StatId,
    name: String,
    value: i32,
    initial_value: i32,
    bounds: StatBounds,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Stat {
    /// Creates a stat. The initial value is clamped into `bounds`.
    pub fn new(
        id: StatId,
        name: impl Into<String>,
        initial_value: i32,
        bounds: StatBounds,
    ) -> Self {
        let initial_value = bounds.clamp(initial_value);
        Self {
            id,
            name: name.into(),
            value: initial_value,
            initial_value,
            bounds,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn id(&self) -> StatId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn initial_value(&self) -> i32 {
        self.initial_value
    }

    pub fn bounds(&self) -> StatBounds {
        self.bounds
    }

    /// Writes a new value, clamped into bounds.
    ///
    /// Returns true if the stored value changed (and observers were notified).
    pub fn set_value(&mut self, value: i32) -> bool {
        let new_value = self.bounds.clamp(value);
        if new_value == self.value {
            return false;
        }

        let old_value = self.value;
        self.value = new_value;
        self.notify(old_value, new_value);
        true
    }

    /// Adds `delta` (which may be negative) to the current value.
    pub fn adjust(&mut self, delta: i32) -> bool {
        self.set_value(self.value.saturating_add(delta))
    }

    /// Restores the construction-time value.
    pub fn reset(&mut self) -> bool {
        self.set_value(self.initial_value)
    }

    /// Registers a callback fired on every actual value change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StatChanged) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    fn notify(&mut self, old_value: i32, new_value: i32) {
        if self.observers.is_empty() {
            return;
        }

        let event = StatChanged {
            stat: self.id,
            name: self.name.clone(),
            old_value,
            new_value,
        };
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}

impl fmt::Debug for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stat")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("value", &self.value)
            .field("initial_value", &self.initial_value)
            .field("bounds", &self.bounds)
            .field("observers", &self.observers.len())
            .finish()
    }
}
