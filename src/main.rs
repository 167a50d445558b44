use std::process::ExitCode;
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::diagnostic::{DiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::log::{Level, LogPlugin};
use clap::Parser;

use gravwell::cli::{Args, load_and_apply_config};
use gravwell::plugins::diagnostics::SimulationDiagnosticsPlugin;
use gravwell::plugins::simulation::SimulationPlugin;
use gravwell::prelude::*;

/// Frames to run before exiting
#[derive(Resource, Deref, Copy, Clone, Debug)]
struct FrameLimit(u32);

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.print_config {
        return match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                print!("{toml_string}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: failed to serialize configuration: {e}");
                ExitCode::FAILURE
            }
        };
    }

    if args.save_config {
        return match config.save_to_user_config() {
            Ok(path) => {
                println!("Saved configuration to: {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: failed to save configuration: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut app = App::new();

    let (level, filter) = if args.verbose {
        (Level::DEBUG, "gravwell=debug".to_string())
    } else {
        (Level::INFO, "gravwell=info".to_string())
    };

    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)),
        LogPlugin {
            level,
            filter,
            ..default()
        },
        bevy::state::app::StatesPlugin,
        DiagnosticsPlugin,
    ));

    app.add_plugins((
        SimulationPlugin::new(config),
        SimulationDiagnosticsPlugin::default().with_tick_interval(10),
    ));

    if args.verbose {
        app.add_plugins(LogDiagnosticsPlugin {
            wait_duration: Duration::from_secs(1),
            ..default()
        });
    }

    if args.paused {
        app.insert_resource(NextState::Pending(AppState::Paused));
    }

    app.insert_resource(FrameLimit(args.ticks));
    app.add_systems(Last, exit_after_frame_limit);

    match app.run() {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}

fn exit_after_frame_limit(
    mut frames: Local<u32>,
    limit: Res<FrameLimit>,
    bodies: Res<Bodies>,
    ticks: Res<TickCount>,
    mut exit: EventWriter<AppExit>,
) {
    *frames += 1;
    if *frames < **limit {
        return;
    }

    info!(
        "Finished after {} frames ({} ticks), {} bodies remain",
        *frames,
        **ticks,
        bodies.len()
    );
    exit.write(AppExit::Success);
}
