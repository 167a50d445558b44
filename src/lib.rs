//! Gravwell library
//!
//! A 2D N-body gravity engine with merging collisions. The engine itself
//! lives in [`physics`] and is a pure function of the body collection;
//! the Bevy plugins in [`plugins`] drive it one tick per frame.

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod scenario;
pub mod states;

// Test utilities are public for integration tests
pub mod test_utils;
