//! Collision detection and resolution
//!
//! Detection finds every overlapping pair in the post-integration state;
//! resolution replaces overlapping pairs with momentum-conserving mergers
//! and repeats until the collection is overlap-free.

pub mod detection;
pub mod resolution;

pub use detection::{OverlapPair, overlapping_pairs};
pub use resolution::{merge_bodies, resolve_collisions};
