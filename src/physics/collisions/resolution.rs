//! Collision resolution through momentum-conserving mergers
//!
//! When bodies collide they merge into a single new body that conserves:
//! - Total mass
//! - Total momentum
//! - Centre of mass
//!
//! The radius of the result follows from its mass (`sqrt(M)`), which in 2D
//! also conserves total disc area.

use super::detection::overlapping_pairs;
use crate::physics::body::Body;
use crate::physics::math::mass_weighted_mean;

/// Merge two bodies, conserving mass and momentum
///
/// ```text
/// M     = m_a + m_b
/// v_new = (m_a v_a + m_b v_b) / M
/// x_new = (m_a x_a + m_b x_b) / M
/// r_new = sqrt(M)
/// ```
///
/// # Examples
///
/// ```
/// use gravwell::physics::body::Body;
/// use gravwell::physics::collisions::merge_bodies;
/// use gravwell::physics::math::Vector;
///
/// let a = Body::new(Vector::new(0.0, 0.0), Vector::new(2.0, 0.0), 1.0).unwrap();
/// let b = Body::new(Vector::new(0.5, 0.0), Vector::new(0.0, 0.0), 3.0).unwrap();
///
/// let merged = merge_bodies(&a, &b);
///
/// assert_eq!(merged.mass(), 4.0);
/// assert_eq!(merged.radius(), 2.0);
/// assert_eq!(merged.momentum(), a.momentum() + b.momentum());
/// ```
pub fn merge_bodies(a: &Body, b: &Body) -> Body {
    let position = mass_weighted_mean(a.position(), a.mass(), b.position(), b.mass());
    let velocity = mass_weighted_mean(a.velocity(), a.mass(), b.velocity(), b.mass());

    Body::from_parts(position, velocity, a.mass() + b.mass())
}

/// Replace every overlapping group of bodies with a single merged body
///
/// Works in passes. Each pass:
/// 1. collects the complete set of overlapping pairs in index order,
/// 2. walks it, merging a pair only if neither body has already been
///    consumed in this pass,
/// 3. builds a fresh collection in which each merged body takes the slot of
///    its lower-indexed parent and the higher-indexed parent is dropped.
///
/// A merger can create a new overlap (A+B now reaching C), so passes repeat
/// until none remains. Every pass with at least one overlap removes at least
/// one body, so the loop terminates. Collections of zero or one body are
/// returned unchanged.
pub fn resolve_collisions(mut bodies: Vec<Body>) -> Vec<Body> {
    loop {
        let pairs = overlapping_pairs(&bodies);
        if pairs.is_empty() {
            return bodies;
        }

        // None: untouched; Some(None): consumed into a lower slot; Some(Some(_)): merged result
        let mut slots: Vec<Option<Option<Body>>> = vec![None; bodies.len()];

        for pair in pairs {
            if slots[pair.first].is_some() || slots[pair.second].is_some() {
                continue;
            }

            let merged = merge_bodies(&bodies[pair.first], &bodies[pair.second]);
            slots[pair.first] = Some(Some(merged));
            slots[pair.second] = Some(None);
        }

        bodies = bodies
            .into_iter()
            .zip(slots)
            .filter_map(|(body, slot)| match slot {
                None => Some(body),
                Some(merged) => merged,
            })
            .collect();
    }
}
