//! Integration tests for reproducible runs

use gravwell::config::SimulationConfig;
use gravwell::physics::{Body, step};
use gravwell::plugins::simulation::SimulationPlugin;
use gravwell::prelude::*;
use gravwell::scenario::random_bodies;
use gravwell::test_utils::{create_test_app, run_frames};

fn seeded_config(seed: u64) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.scenario.body_count = 50;
    config.scenario.seed = Some(seed);
    config
}

fn run_headless(config: SimulationConfig, frames: usize) -> Vec<Body> {
    let mut app = create_test_app();
    app.add_plugins(SimulationPlugin::new(config));
    run_frames(&mut app, frames);
    app.world().resource::<Bodies>().0.clone()
}

#[test]
fn test_step_is_a_pure_function() {
    let config = seeded_config(42);
    let constants = config.physics_constants();

    let mut rng = SharedRng::from_seed(42);
    let initial = random_bodies(&mut *rng, &config);

    let mut first = initial.clone();
    let mut second = initial;
    for _ in 0..200 {
        first = step(first, &constants);
        second = step(second, &constants);
    }

    assert_eq!(first, second);
}

#[test]
fn test_headless_runs_are_reproducible() {
    let first = run_headless(seeded_config(7), 120);
    let second = run_headless(seeded_config(7), 120);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_headless_run_matches_direct_stepping() {
    let config = seeded_config(99);
    let constants = config.physics_constants();

    let mut rng = SharedRng::from_seed(99);
    let mut expected = random_bodies(&mut *rng, &config);
    for _ in 0..60 {
        expected = step(expected, &constants);
    }

    assert_eq!(run_headless(config, 60), expected);
}

#[test]
fn test_different_seeds_diverge() {
    let first = run_headless(seeded_config(1), 10);
    let second = run_headless(seeded_config(2), 10);

    assert_ne!(first, second);
}
