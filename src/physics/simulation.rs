//! One simulation tick and the between-tick mutation paths
//!
//! `step` is a pure function of the body collection and the constants: it
//! holds no state of its own. `spawn` and `remove` are the only other ways
//! the collection changes, and callers must only use them between ticks.

use serde::{Deserialize, Serialize};

use crate::error::SpawnError;
use crate::physics::body::Body;
use crate::physics::collisions::resolve_collisions;
use crate::physics::forces::SoftenedGravity;
use crate::physics::integrators::{Integrator, SymplecticEuler};
use crate::physics::math::{Scalar, Vector};

/// Rectangle the plane wraps around at, `[0, width] × [0, height]`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: Scalar,
    pub height: Scalar,
}

impl WorldBounds {
    pub fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }

    /// Teleport a body whose disc has fully left the rectangle to the opposite edge
    ///
    /// Returns whether the body moved.
    pub fn wrap(&self, body: &mut Body) -> bool {
        let radius = body.radius();
        let position = body.position_mut();
        let mut wrapped = false;

        if position.x + radius < 0.0 {
            position.x = self.width + radius;
            wrapped = true;
        } else if position.x - radius > self.width {
            position.x = -radius;
            wrapped = true;
        }

        if position.y + radius < 0.0 {
            position.y = self.height + radius;
            wrapped = true;
        } else if position.y - radius > self.height {
            position.y = -radius;
            wrapped = true;
        }

        wrapped
    }
}

/// Physical constants for a simulation, passed by value into every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConstants {
    /// Gravitational constant `G`
    pub gravitational_constant: Scalar,
    /// Softening length `ε`, must be positive
    pub softening: Scalar,
    /// Time step `dt`, must be positive
    pub time_step: Scalar,
    /// Wrap-around rectangle; `None` for an unbounded plane
    pub bounds: Option<WorldBounds>,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self {
            gravitational_constant: 10.0,
            softening: 0.1,
            time_step: 0.05,
            bounds: None,
        }
    }
}

impl PhysicsConstants {
    pub fn new(gravitational_constant: Scalar, softening: Scalar, time_step: Scalar) -> Self {
        Self {
            gravitational_constant,
            softening,
            time_step,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: WorldBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[inline]
    pub fn gravity(&self) -> SoftenedGravity {
        SoftenedGravity::new(self.gravitational_constant, self.softening)
    }
}

/// Advance the whole system by exactly one tick
///
/// 1. Net forces from the pre-step state.
/// 2. Symplectic Euler step for every body.
/// 3. Optional wrap-around at the world bounds.
/// 4. Collision resolution, which may shrink the collection.
///
/// The output is overlap-free and is the authoritative state for the next tick.
pub fn step(bodies: Vec<Body>, constants: &PhysicsConstants) -> Vec<Body> {
    step_with(&SymplecticEuler, bodies, constants)
}

/// [`step`] with an explicit integrator
pub fn step_with(
    integrator: &dyn Integrator,
    mut bodies: Vec<Body>,
    constants: &PhysicsConstants,
) -> Vec<Body> {
    let forces = constants.gravity().net_forces(&bodies);

    integrator.integrate(&mut bodies, &forces, constants.time_step);

    if let Some(bounds) = constants.bounds {
        for body in &mut bodies {
            bounds.wrap(body);
        }
    }

    resolve_collisions(bodies)
}

/// Append a new body to the collection
///
/// Invalid input (non-positive or non-finite mass, non-finite position or
/// velocity) is rejected here so the step pipeline never has to check it.
/// On error the collection is left untouched. Returns the new body's index.
pub fn spawn(
    bodies: &mut Vec<Body>,
    position: Vector,
    velocity: Vector,
    mass: Scalar,
) -> Result<usize, SpawnError> {
    let body = Body::new(position, velocity, mass)?;
    bodies.push(body);
    Ok(bodies.len() - 1)
}

/// Remove the body at `index`, keeping the others in order
///
/// Returns the removed body, or `None` when `index` is out of range.
pub fn remove(bodies: &mut Vec<Body>, index: usize) -> Option<Body> {
    if index >= bodies.len() {
        return None;
    }

    Some(bodies.remove(index))
}

/// Index of the first body whose centre is within `radius + tolerance` of `point`
pub fn body_at(bodies: &[Body], point: Vector, tolerance: Scalar) -> Option<usize> {
    bodies
        .iter()
        .position(|body| body.position().distance(point) <= body.radius() + tolerance)
}
