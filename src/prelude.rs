//! Gravwell prelude module
//!
//! Re-exports the types most systems and tests need.

// External crate re-exports
pub use bevy::prelude::*;
pub use rand::Rng;

// Internal re-exports - Config
pub use crate::config::SimulationConfig;

// Internal re-exports - States
pub use crate::states::AppState;

// Internal re-exports - Resources
pub use crate::resources::{Bodies, Constants, SharedRng, TickCount};

// Internal re-exports - Events
pub use crate::events::{RemoveBody, SimulationCommand, SpawnBody};
