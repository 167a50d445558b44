//! Simulation plugin - Self-contained plugin pattern
//!
//! Owns the body collection as a resource and advances it by exactly one
//! tick per `Update`. External mutation (spawn, remove, parameter changes)
//! arrives as events and is applied in [`SimulationSet::Input`], strictly
//! before [`SimulationSet::Step`].

use crate::prelude::*;

mod actions;
mod physics;

use actions::{handle_remove_body_events, handle_simulation_commands, handle_spawn_body_events};
use bevy::ecs::schedule::{LogLevel, ScheduleBuildSettings};
use physics::{advance_simulation, report_progress, spawn_initial_bodies};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Step,
    Report,
}

pub struct SimulationPlugin {
    config: SimulationConfig,
}

impl SimulationPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(e) => {
                error!("{}. Using default configuration.", e);
                SimulationConfig::default()
            }
        };

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                info!("=== Current Configuration (TOML) ===\n{}", toml_string);
                info!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        app.insert_resource(SharedRng::from_optional_seed(config.scenario.seed));
        app.insert_resource(Constants(config.physics_constants()));
        app.insert_resource(config);
        app.init_resource::<Bodies>();
        app.init_resource::<TickCount>();

        app.init_state::<AppState>();

        app.add_event::<SimulationCommand>();
        app.add_event::<SpawnBody>();
        app.add_event::<RemoveBody>();

        app.edit_schedule(Update, |schedule| {
            schedule.set_build_settings(ScheduleBuildSettings {
                ambiguity_detection: LogLevel::Warn,
                ..default()
            });
        });

        app.configure_sets(
            Update,
            (
                SimulationSet::Input,
                SimulationSet::Step,
                SimulationSet::Report,
            )
                .chain(),
        );

        app.add_systems(Startup, spawn_initial_bodies);

        app.add_systems(
            Update,
            (
                (
                    handle_simulation_commands,
                    handle_remove_body_events,
                    handle_spawn_body_events,
                )
                    .chain()
                    .in_set(SimulationSet::Input),
                advance_simulation
                    .in_set(SimulationSet::Step)
                    .run_if(in_state(AppState::Running)),
                report_progress.in_set(SimulationSet::Report),
            ),
        );
    }
}
