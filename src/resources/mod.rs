use crate::physics::body::Body;
use crate::physics::simulation::PhysicsConstants;
use crate::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

/// The authoritative body collection, replaced wholesale every tick
#[derive(Resource, Deref, DerefMut, Clone, Default, PartialEq, Debug)]
pub struct Bodies(pub Vec<Body>);

#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Debug)]
pub struct Constants(pub PhysicsConstants);

/// Number of ticks advanced since startup or the last restart
#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct TickCount(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_rng_deterministic_with_seed() {
        let seed = 12345u64;
        let mut rng1 = SharedRng::from_seed(seed);
        let mut rng2 = SharedRng::from_seed(seed);

        let values1: Vec<f64> = (0..10).map(|_| rng1.random_range(0.0..1.0)).collect();
        let values2: Vec<f64> = (0..10).map(|_| rng2.random_range(0.0..1.0)).collect();

        assert_eq!(values1, values2);
    }

    #[test]
    fn test_shared_rng_from_optional_seed() {
        let seed = 54321u64;
        let mut rng_with_seed = SharedRng::from_optional_seed(Some(seed));
        let mut rng_with_same_seed = SharedRng::from_seed(seed);

        let value1: f64 = rng_with_seed.random_range(0.0..1.0);
        let value2: f64 = rng_with_same_seed.random_range(0.0..1.0);

        assert_eq!(value1, value2);
    }

    #[test]
    fn test_shared_rng_from_optional_seed_none() {
        let mut rng1 = SharedRng::from_optional_seed(None);
        let mut rng2 = SharedRng::from_optional_seed(None);

        let value1: f64 = rng1.random_range(0.0..1.0);
        let value2: f64 = rng2.random_range(0.0..1.0);

        // Independently seeded from the OS
        assert_ne!(value1, value2);
    }

    #[test]
    fn test_defaults() {
        assert!(Bodies::default().is_empty());
        assert_eq!(*TickCount::default(), 0);
        assert_eq!(*Constants::default(), PhysicsConstants::default());
    }
}
