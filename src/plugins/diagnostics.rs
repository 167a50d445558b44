//! Simulation diagnostics
//!
//! Registers Bevy diagnostics for the conserved quantities of the body
//! collection so they get history, smoothing, and `LogDiagnosticsPlugin`
//! output for free.

use crate::physics::diagnostics::SystemSummary;
use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use bevy::diagnostic::DEFAULT_MAX_HISTORY_LENGTH;
use bevy::diagnostic::Diagnostic;
use bevy::diagnostic::DiagnosticPath;
use bevy::diagnostic::Diagnostics;
use bevy::diagnostic::RegisterDiagnostic;

pub struct SimulationDiagnosticsPlugin {
    max_history_length: usize,
    smoothing_factor: f64,
    /// Measure every `tick_interval` ticks
    tick_interval: u64,
}

impl Default for SimulationDiagnosticsPlugin {
    fn default() -> Self {
        Self {
            max_history_length: DEFAULT_MAX_HISTORY_LENGTH,
            smoothing_factor: 0.0,
            tick_interval: 1,
        }
    }
}

impl SimulationDiagnosticsPlugin {
    pub const BODY_COUNT_PATH: DiagnosticPath = DiagnosticPath::const_new("bodies/count");
    pub const TOTAL_MASS_PATH: DiagnosticPath = DiagnosticPath::const_new("bodies/total_mass");

    pub const MOMENTUM_X_PATH: DiagnosticPath = DiagnosticPath::const_new("momentum/x");
    pub const MOMENTUM_Y_PATH: DiagnosticPath = DiagnosticPath::const_new("momentum/y");

    pub const BARYCENTER_X_PATH: DiagnosticPath = DiagnosticPath::const_new("barycenter/x");
    pub const BARYCENTER_Y_PATH: DiagnosticPath = DiagnosticPath::const_new("barycenter/y");

    pub const KINETIC_ENERGY_PATH: DiagnosticPath = DiagnosticPath::const_new("energy/kinetic");
    pub const POTENTIAL_ENERGY_PATH: DiagnosticPath =
        DiagnosticPath::const_new("energy/potential");
    pub const TOTAL_ENERGY_PATH: DiagnosticPath = DiagnosticPath::const_new("energy/total");

    const DIAGNOSTIC_PATHS: &'static [DiagnosticPath] = &[
        Self::BODY_COUNT_PATH,
        Self::TOTAL_MASS_PATH,
        Self::MOMENTUM_X_PATH,
        Self::MOMENTUM_Y_PATH,
        Self::BARYCENTER_X_PATH,
        Self::BARYCENTER_Y_PATH,
        Self::KINETIC_ENERGY_PATH,
        Self::POTENTIAL_ENERGY_PATH,
        Self::TOTAL_ENERGY_PATH,
    ];

    pub fn with_tick_interval(mut self, tick_interval: u64) -> Self {
        self.tick_interval = tick_interval.max(1);
        self
    }

    fn register_diagnostics(&self, app: &mut App) {
        for path in Self::DIAGNOSTIC_PATHS {
            app.register_diagnostic(
                Diagnostic::new(path.clone())
                    .with_max_history_length(self.max_history_length)
                    .with_smoothing_factor(self.smoothing_factor),
            );
        }
    }

    fn update_summary_diagnostics(
        bodies: Res<Bodies>,
        constants: Res<Constants>,
        ticks: Res<TickCount>,
        interval: Res<DiagnosticsTickInterval>,
        mut diagnostics: Diagnostics,
    ) {
        if !ticks.is_changed() || **ticks % **interval != 0 {
            return;
        }

        let summary = SystemSummary::of(&bodies, &constants);

        diagnostics.add_measurement(&Self::BODY_COUNT_PATH, || summary.body_count as f64);
        diagnostics.add_measurement(&Self::TOTAL_MASS_PATH, || summary.total_mass);
        diagnostics.add_measurement(&Self::MOMENTUM_X_PATH, || summary.total_momentum.x);
        diagnostics.add_measurement(&Self::MOMENTUM_Y_PATH, || summary.total_momentum.y);
        if let Some(center) = summary.center_of_mass {
            diagnostics.add_measurement(&Self::BARYCENTER_X_PATH, || center.x);
            diagnostics.add_measurement(&Self::BARYCENTER_Y_PATH, || center.y);
        }
        diagnostics.add_measurement(&Self::KINETIC_ENERGY_PATH, || summary.kinetic_energy);
        diagnostics.add_measurement(&Self::POTENTIAL_ENERGY_PATH, || summary.potential_energy);
        diagnostics.add_measurement(&Self::TOTAL_ENERGY_PATH, || summary.total_energy());
    }
}

#[derive(Resource, Deref, Copy, Clone, Debug)]
struct DiagnosticsTickInterval(u64);

impl Plugin for SimulationDiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(DiagnosticsTickInterval(self.tick_interval.max(1)));

        self.register_diagnostics(app);

        app.add_systems(
            Update,
            Self::update_summary_diagnostics.in_set(SimulationSet::Report),
        );
    }
}
