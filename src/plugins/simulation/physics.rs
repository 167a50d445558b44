use crate::physics::diagnostics::SystemSummary;
use crate::physics::simulation::step;
use crate::prelude::*;
use crate::scenario::random_bodies;

/// Ticks between progress lines in the log
const REPORT_INTERVAL: u64 = 100;

pub fn spawn_initial_bodies(
    mut bodies: ResMut<Bodies>,
    mut rng: ResMut<SharedRng>,
    config: Res<SimulationConfig>,
) {
    **bodies = random_bodies(&mut **rng, &config);
    info!("Spawned {} bodies", bodies.len());
}

/// Advance the collection by one tick
///
/// The collection is moved out of the resource, stepped, and moved back, so
/// no other system can observe it half-updated.
pub fn advance_simulation(
    mut bodies: ResMut<Bodies>,
    constants: Res<Constants>,
    mut ticks: ResMut<TickCount>,
) {
    let before = bodies.len();
    **bodies = step(std::mem::take(&mut **bodies), &constants);
    **ticks += 1;

    let merged = before - bodies.len();
    if merged > 0 {
        debug!(
            "Tick {}: {} merger(s), {} bodies remain",
            **ticks,
            merged,
            bodies.len()
        );
    }
}

pub fn report_progress(bodies: Res<Bodies>, constants: Res<Constants>, ticks: Res<TickCount>) {
    if !ticks.is_changed() || **ticks % REPORT_INTERVAL != 0 {
        return;
    }

    let summary = SystemSummary::of(&bodies, &constants);
    info!(
        "Tick {}: {} bodies, mass {:.3}, momentum ({:.3}, {:.3}), energy {:.3}",
        **ticks,
        summary.body_count,
        summary.total_mass,
        summary.total_momentum.x,
        summary.total_momentum.y,
        summary.total_energy()
    );
}
