//! Conserved-quantity summaries of a body collection

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};
use crate::physics::simulation::PhysicsConstants;

/// Snapshot of the quantities a merger or a tick should preserve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemSummary {
    pub body_count: usize,
    pub total_mass: Scalar,
    pub total_momentum: Vector,
    /// `None` for an empty collection
    pub center_of_mass: Option<Vector>,
    pub kinetic_energy: Scalar,
    /// Softened potential energy, consistent with the force law in use
    pub potential_energy: Scalar,
}

impl SystemSummary {
    pub fn of(bodies: &[Body], constants: &PhysicsConstants) -> Self {
        let (weighted_positions, total_mass) = bodies
            .iter()
            .fold((Vector::ZERO, 0.0), |(pos_acc, mass_acc), body| {
                (pos_acc + body.position() * body.mass(), mass_acc + body.mass())
            });

        let center_of_mass = (total_mass > 0.0).then(|| weighted_positions / total_mass);

        Self {
            body_count: bodies.len(),
            total_mass,
            total_momentum: bodies.iter().map(Body::momentum).sum(),
            center_of_mass,
            kinetic_energy: bodies.iter().map(Body::kinetic_energy).sum(),
            potential_energy: constants.gravity().potential_energy(bodies),
        }
    }

    #[inline]
    pub fn total_energy(&self) -> Scalar {
        self.kinetic_energy + self.potential_energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_collection() {
        let summary = SystemSummary::of(&[], &PhysicsConstants::default());

        assert_eq!(summary.body_count, 0);
        assert_eq!(summary.total_mass, 0.0);
        assert_eq!(summary.total_momentum, Vector::ZERO);
        assert_eq!(summary.center_of_mass, None);
        assert_eq!(summary.total_energy(), 0.0);
    }

    #[test]
    fn test_summary_of_two_bodies() {
        let bodies = [
            Body::new(Vector::new(0.0, 0.0), Vector::new(1.0, 0.0), 1.0).unwrap(),
            Body::new(Vector::new(4.0, 0.0), Vector::new(0.0, 2.0), 3.0).unwrap(),
        ];
        let constants = PhysicsConstants::new(1.0, 0.0, 0.1);

        let summary = SystemSummary::of(&bodies, &constants);

        assert_eq!(summary.body_count, 2);
        assert_eq!(summary.total_mass, 4.0);
        assert_eq!(summary.total_momentum, Vector::new(1.0, 6.0));
        assert_eq!(summary.center_of_mass, Some(Vector::new(3.0, 0.0)));
        assert!((summary.kinetic_energy - 6.5).abs() < 1e-12);
        assert!((summary.potential_energy + 0.75).abs() < 1e-12);
    }
}
