//! Centralized event definitions
//!
//! Everything that mutates the body collection from outside the step system
//! arrives as one of these events. They are drained in `SimulationSet::Input`,
//! strictly before the tick runs.

use bevy::prelude::*;

use crate::physics::math::{Scalar, Vector};

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SimulationCommand {
    Restart,
    TogglePause,
    /// Add to `G`, clamped to the configured gravity range
    AdjustGravity(Scalar),
    /// Add to `dt`; a result at or below zero pauses instead
    AdjustTimeStep(Scalar),
    SetGravity(Scalar),
    SetTimeStep(Scalar),
}

/// Request to append a body between ticks
///
/// Missing velocity is drawn from the shared RNG; missing mass falls back to
/// the configured default.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpawnBody {
    pub position: Vector,
    pub velocity: Option<Vector>,
    pub mass: Option<Scalar>,
}

impl SpawnBody {
    pub fn at(position: Vector) -> Self {
        Self {
            position,
            velocity: None,
            mass: None,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn with_mass(mut self, mass: Scalar) -> Self {
        self.mass = Some(mass);
        self
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum RemoveBody {
    Index(usize),
    /// Remove the first body under this point, using the configured hit tolerance
    At(Vector),
}
