//! Initial body layouts

use rand::Rng;

use crate::config::SimulationConfig;
use crate::physics::body::Body;
use crate::physics::math::{random_component_vector, random_point_in_rect};

/// Scatter `scenario.body_count` bodies uniformly over the scenario rectangle
///
/// Each body gets the configured spawn mass and a random velocity. Bodies that
/// happen to start overlapping are left as they are; the first tick merges them.
pub fn random_bodies<R: Rng + ?Sized>(rng: &mut R, config: &SimulationConfig) -> Vec<Body> {
    let mass = config.spawn_mass();
    let scenario = &config.scenario;

    (0..scenario.body_count)
        .filter_map(|_| {
            let position = random_point_in_rect(rng, scenario.width, scenario.height);
            let velocity = random_component_vector(rng, config.spawn.random_speed);
            Body::new(position, velocity, mass).ok()
        })
        .collect()
}
