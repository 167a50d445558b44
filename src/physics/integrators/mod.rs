//! Numerical integration for the n-body simulation

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};

pub mod symplectic_euler;

pub use symplectic_euler::SymplecticEuler;

/// Base trait for integrators
pub trait Integrator: Send + Sync {
    /// Advance a single body's state by one time step
    ///
    /// # Arguments
    /// * `position` - Mutable reference to position
    /// * `velocity` - Mutable reference to velocity vector
    /// * `acceleration` - Acceleration computed from the pre-step state
    /// * `dt` - Time step
    fn integrate_single(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        acceleration: Vector,
        dt: Scalar,
    );

    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the order of this integrator
    fn order(&self) -> usize;

    /// Advance every body by one step using its net force (`a = F / m`).
    ///
    /// `forces` must be index-aligned with `bodies`. Each body is advanced
    /// independently, so the order of application has no effect.
    fn integrate(&self, bodies: &mut [Body], forces: &[Vector], dt: Scalar) {
        debug_assert_eq!(bodies.len(), forces.len());

        for (body, &force) in bodies.iter_mut().zip(forces) {
            let acceleration = force / body.mass();
            let mut position = body.position();
            let mut velocity = body.velocity();

            self.integrate_single(&mut position, &mut velocity, acceleration, dt);

            *body.position_mut() = position;
            *body.velocity_mut() = velocity;
        }
    }
}
