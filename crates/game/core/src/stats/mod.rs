//! Clamped gameplay values with change notification.
//!
//! Stats are consumed by gameplay code (health, hit chance, morale). Every write
//! is clamped to the stat's bounds, and observers hear about a write only when
//! the stored value really moves.
mod manager;
mod stat;

pub use manager::StatManager;
pub use stat::{Stat, StatBounds, StatChanged, StatError, StatId, SubscriptionId};
