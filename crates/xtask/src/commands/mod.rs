//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod build_level;
mod inspect_map;

pub use build_level::BuildLevel;
pub use inspect_map::InspectMap;
