//! Point-mass bodies

use crate::error::SpawnError;
use crate::physics::math::{Scalar, Vector};

/// A point mass moving in the plane
///
/// The radius is never stored: it is always derived from the mass as
/// `sqrt(mass)` (area proportional to mass), so it cannot drift out of sync
/// after a merger.
///
/// Bodies carry no identity. A merger produces a brand new `Body` rather
/// than mutating either input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    position: Vector,
    velocity: Vector,
    mass: Scalar,
}

impl Body {
    /// Create a body, rejecting non-positive masses and non-finite vectors
    pub fn new(position: Vector, velocity: Vector, mass: Scalar) -> Result<Self, SpawnError> {
        if mass.is_nan() || mass <= 0.0 {
            return Err(SpawnError::NonPositiveMass(mass));
        }
        if !mass.is_finite() {
            return Err(SpawnError::NonFiniteMass(mass));
        }
        if !position.is_finite() {
            return Err(SpawnError::NonFinitePosition);
        }
        if !velocity.is_finite() {
            return Err(SpawnError::NonFiniteVelocity);
        }

        Ok(Self::from_parts(position, velocity, mass))
    }

    /// Build a body from values already known to be valid.
    ///
    /// Reserved for the engine's own arithmetic (integration, mergers), whose
    /// inputs were validated when they entered the collection.
    #[inline]
    pub(crate) fn from_parts(position: Vector, velocity: Vector, mass: Scalar) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    #[inline]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Radius derived from mass: `sqrt(mass)`
    #[inline]
    pub fn radius(&self) -> Scalar {
        self.mass.sqrt()
    }

    /// Linear momentum `m * v`
    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    /// Kinetic energy `½ m |v|²`
    #[inline]
    pub fn kinetic_energy(&self) -> Scalar {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Whether the discs of `self` and `other` overlap.
    ///
    /// This is a purely geometric test (no softening): `distance < r_a + r_b`.
    /// Bodies that merely touch do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        self.position.distance(other.position) < self.radius() + other.radius()
    }

    #[inline]
    pub(crate) fn position_mut(&mut self) -> &mut Vector {
        &mut self.position
    }

    #[inline]
    pub(crate) fn velocity_mut(&mut self) -> &mut Vector {
        &mut self.velocity
    }
}
