//! Overlap detection
//!
//! Brute-force O(N²) scan. Pairs are reported in stable index order
//! (`first` ascending, then `second` ascending), which is what makes
//! resolution deterministic.

use crate::physics::body::Body;
use crate::physics::math::Scalar;

/// Two bodies whose discs overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapPair {
    /// Lower index into the scanned slice
    pub first: usize,
    /// Higher index into the scanned slice
    pub second: usize,
    /// Centre-to-centre distance
    pub separation: Scalar,
    /// Sum of the two radii that `separation` fell below
    pub contact_distance: Scalar,
}

/// Every pair `(i, j)`, `i < j`, with `distance < r_i + r_j`
///
/// The distance is the plain Euclidean one; softening plays no part here.
pub fn overlapping_pairs(bodies: &[Body]) -> Vec<OverlapPair> {
    let mut pairs = Vec::new();

    for (first, a) in bodies.iter().enumerate() {
        for (offset, b) in bodies[first + 1..].iter().enumerate() {
            let separation = a.position().distance(b.position());
            let contact_distance = a.radius() + b.radius();

            if separation < contact_distance {
                pairs.push(OverlapPair {
                    first,
                    second: first + 1 + offset,
                    separation,
                    contact_distance,
                });
            }
        }
    }

    pairs
}
