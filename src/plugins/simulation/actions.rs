//! Action handlers for simulation input
//!
//! Everything here runs in `SimulationSet::Input`, before the tick, so the
//! step system always sees a collection that is not being mutated.

use crate::physics::math::random_component_vector;
use crate::physics::simulation::{body_at, remove, spawn};
use crate::prelude::*;
use crate::scenario::random_bodies;

#[allow(clippy::too_many_arguments)]
pub fn handle_simulation_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut constants: ResMut<Constants>,
    mut bodies: ResMut<Bodies>,
    mut ticks: ResMut<TickCount>,
    mut rng: ResMut<SharedRng>,
    config: Res<SimulationConfig>,
) {
    let initial_state = *current_state.get();
    let mut state = initial_state;

    for command in commands_reader.read() {
        match *command {
            SimulationCommand::TogglePause => {
                state = state.toggled();
            }
            SimulationCommand::AdjustGravity(delta) => {
                let requested = constants.gravitational_constant + delta;
                constants.gravitational_constant = config.physics.gravity_range.clamp(requested);
                info!("Gravitational constant: {}", constants.gravitational_constant);
            }
            SimulationCommand::AdjustTimeStep(delta) => {
                let requested = constants.time_step + delta;
                if requested <= 0.0 {
                    info!("Time step reached zero, pausing");
                    state = AppState::Paused;
                } else {
                    constants.time_step = config.physics.time_step_range.clamp(requested);
                    info!("Time step: {}", constants.time_step);
                    if delta != 0.0 {
                        state = AppState::Running;
                    }
                }
            }
            SimulationCommand::SetGravity(value) => {
                constants.gravitational_constant = config.physics.gravity_range.clamp(value);
                info!("Gravitational constant: {}", constants.gravitational_constant);
            }
            SimulationCommand::SetTimeStep(value) => {
                constants.time_step = config.physics.time_step_range.clamp(value);
                info!("Time step: {}", constants.time_step);
            }
            SimulationCommand::Restart => {
                *rng = SharedRng::from_optional_seed(config.scenario.seed);
                **bodies = random_bodies(&mut **rng, &config);
                **constants = config.physics_constants();
                **ticks = 0;
                info!("Simulation restarted with {} bodies", bodies.len());
            }
        }
    }

    if state != initial_state {
        debug!("Simulation state: {:?} -> {:?}", initial_state, state);
        next_state.set(state);
    }
}

pub fn handle_remove_body_events(
    mut remove_reader: EventReader<RemoveBody>,
    mut bodies: ResMut<Bodies>,
    config: Res<SimulationConfig>,
) {
    for request in remove_reader.read() {
        let index = match *request {
            RemoveBody::Index(index) => Some(index),
            RemoveBody::At(point) => body_at(&bodies, point, config.spawn.hit_tolerance),
        };

        let Some(index) = index else {
            debug!("No body to remove for {:?}", request);
            continue;
        };

        match remove(&mut bodies.0, index) {
            Some(removed) => {
                debug!("Removed body {} (mass {})", index, removed.mass());
            }
            None => warn!("Body index {} out of range", index),
        }
    }
}

pub fn handle_spawn_body_events(
    mut spawn_reader: EventReader<SpawnBody>,
    mut bodies: ResMut<Bodies>,
    mut rng: ResMut<SharedRng>,
    config: Res<SimulationConfig>,
) {
    for request in spawn_reader.read() {
        let velocity = request
            .velocity
            .unwrap_or_else(|| random_component_vector(&mut **rng, config.spawn.random_speed));
        let mass = request.mass.unwrap_or_else(|| config.spawn_mass());

        match spawn(&mut bodies.0, request.position, velocity, mass) {
            Ok(index) => {
                debug!(
                    "Spawned body {} at {} with mass {}",
                    index, request.position, mass
                );
            }
            Err(e) => {
                warn!("Rejected spawn request {:?}: {}", request, e);
            }
        }
    }
}
