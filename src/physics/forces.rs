//! Pairwise softened gravity
//!
//! Exact O(n²) summation over every unordered pair. Each pair is evaluated
//! once and its force applied to both bodies with opposite signs, so the
//! net force on the whole collection is zero up to rounding.

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};

/// Plummer-softened Newtonian gravity
///
/// ```text
/// d     = p_j - p_i
/// F_ij  = G * m_i * m_j * d / (|d|² + ε²)^(3/2)
/// ```
///
/// With `ε > 0` the denominator never reaches zero, so the force between
/// near-coincident bodies stays bounded. For `|d| ≪ ε` the scalar factor
/// tends to `G * m_i * m_j / ε³`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftenedGravity {
    pub gravitational_constant: Scalar,
    pub softening: Scalar,
}

impl SoftenedGravity {
    pub fn new(gravitational_constant: Scalar, softening: Scalar) -> Self {
        Self {
            gravitational_constant,
            softening,
        }
    }

    /// Force exerted on `on` by `from`
    #[inline]
    pub fn pair_force(&self, on: &Body, from: &Body) -> Vector {
        let delta = from.position() - on.position();
        let softened_distance_squared = delta.length_squared() + self.softening * self.softening;
        let denominator = softened_distance_squared * softened_distance_squared.sqrt();

        delta * (self.gravitational_constant * on.mass() * from.mass() / denominator)
    }

    /// Net force on every body, index-aligned with `bodies`
    ///
    /// Reads only the current state; the bodies themselves are not touched.
    pub fn net_forces(&self, bodies: &[Body]) -> Vec<Vector> {
        let mut forces = vec![Vector::ZERO; bodies.len()];

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let force = self.pair_force(&bodies[i], &bodies[j]);
                forces[i] += force;
                forces[j] -= force;
            }
        }

        forces
    }

    /// Softened potential energy of the collection: `-Σ G m_i m_j / sqrt(r² + ε²)`
    pub fn potential_energy(&self, bodies: &[Body]) -> Scalar {
        let epsilon_squared = self.softening * self.softening;
        let mut energy = 0.0;

        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                let distance_squared = a.position().distance_squared(b.position());
                energy -= self.gravitational_constant * a.mass() * b.mass()
                    / (distance_squared + epsilon_squared).sqrt();
            }
        }

        energy
    }
}
