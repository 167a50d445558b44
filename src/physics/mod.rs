//! Physics engine for the 2D n-body simulation
//!
//! The pipeline for one tick is forces → integration → collisions, driven
//! by [`simulation::step`].

pub mod body;
pub mod collisions;
pub mod diagnostics;
pub mod forces;
pub mod integrators;
pub mod math;
pub mod simulation;

pub use body::Body;
pub use diagnostics::SystemSummary;
pub use simulation::{PhysicsConstants, WorldBounds, body_at, remove, spawn, step};
