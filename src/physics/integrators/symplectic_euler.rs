//! Symplectic Euler integration method
//!
//! First-order, one force evaluation per step. Velocity is updated before
//! position, which keeps energy error bounded for orbits instead of drifting
//! the way forward Euler does.

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Symplectic Euler integrator (also known as semi-implicit Euler)
///
/// # Algorithm
///
/// ```text
/// Stage 1: Velocity update using the acceleration at the current position
///   v(t+dt) = v(t) + a(t) * dt
///
/// Stage 2: Position update using the NEW velocity
///   x(t+dt) = x(t) + v(t+dt) * dt
/// ```
///
/// Swapping the stages gives explicit Euler, which is not symplectic.
#[derive(Debug, Copy, Clone, Default)]
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn integrate_single(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        acceleration: Vector,
        dt: Scalar,
    ) {
        // Update velocity first: v(t+dt) = v(t) + a(t) * dt
        *velocity += acceleration * dt;

        // Then update position using new velocity: x(t+dt) = x(t) + v(t+dt) * dt
        *position += *velocity * dt;
    }

    fn name(&self) -> &str {
        "symplectic_euler"
    }

    fn order(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::body::Body;

    #[test]
    fn test_symplectic_euler_integrate_single() {
        let integrator = SymplecticEuler;

        let mut position = Vector::new(1.0, 0.0);
        let mut velocity = Vector::new(0.0, 1.0);
        let acceleration = Vector::new(0.0, -9.81);
        let dt = 0.01;

        integrator.integrate_single(&mut position, &mut velocity, acceleration, dt);

        // Velocity should be updated first
        assert!((velocity - Vector::new(0.0, 0.9019)).length() < 1e-12);

        // Position should use the new velocity
        let expected_position = Vector::new(1.0, 0.009019);
        assert!((position - expected_position).length() < 1e-12);
    }

    #[test]
    fn test_position_uses_updated_velocity() {
        // Starting at rest, a position update from the old velocity would not move the body
        let integrator = SymplecticEuler;
        let mut position = Vector::ZERO;
        let mut velocity = Vector::ZERO;

        integrator.integrate_single(&mut position, &mut velocity, Vector::new(2.0, 0.0), 0.5);

        assert_eq!(velocity, Vector::new(1.0, 0.0));
        assert_eq!(position, Vector::new(0.5, 0.0));
    }

    #[test]
    fn test_integrate_divides_force_by_mass() {
        let integrator = SymplecticEuler;
        let mut bodies = vec![
            Body::new(Vector::ZERO, Vector::ZERO, 4.0).unwrap(),
            Body::new(Vector::new(10.0, 0.0), Vector::new(1.0, 1.0), 2.0).unwrap(),
        ];
        let forces = [Vector::new(8.0, 0.0), Vector::ZERO];

        integrator.integrate(&mut bodies, &forces, 0.1);

        // a = 2, v = 0.2, x = 0.02
        assert!((bodies[0].velocity() - Vector::new(0.2, 0.0)).length() < 1e-12);
        assert!((bodies[0].position() - Vector::new(0.02, 0.0)).length() < 1e-12);

        // No force: uniform motion
        assert_eq!(bodies[1].velocity(), Vector::new(1.0, 1.0));
        assert!((bodies[1].position() - Vector::new(10.1, 0.1)).length() < 1e-12);
        assert_eq!(bodies[1].mass(), 2.0);
    }

    #[test]
    fn test_properties() {
        let integrator = SymplecticEuler;
        assert_eq!(integrator.name(), "symplectic_euler");
        assert_eq!(integrator.order(), 1);
    }
}
