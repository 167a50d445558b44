//! Command line interface for Gravwell

use clap::Parser;
use std::fmt;
use std::path::Path;

use crate::config::SimulationConfig;
use crate::error::ConfigError;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file given on the command line does not exist
    ConfigNotFound(String),
    /// Configuration file could not be loaded
    ConfigLoad(ConfigError),
    /// An override produced a configuration the engine cannot run
    InvalidOverride(ConfigError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigNotFound(path) => write!(f, "Configuration file not found: {path}"),
            CliError::ConfigLoad(err) => write!(f, "Failed to load configuration: {err}"),
            CliError::InvalidOverride(err) => write!(f, "Invalid command line override: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigNotFound(_) => None,
            CliError::ConfigLoad(err) | CliError::InvalidOverride(err) => Some(err),
        }
    }
}

/// Gravwell - 2D N-body gravity simulation with merging collisions
#[derive(Parser, Debug)]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about,
    long_about = None
)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Number of bodies to simulate (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub bodies: Option<usize>,

    /// Gravitational constant, clamped to the configured range; unparseable
    /// values keep the configured one (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE", allow_hyphen_values = true)]
    pub gravity: Option<String>,

    /// Softening length (overrides config file)
    #[arg(long, value_name = "LENGTH")]
    pub softening: Option<f64>,

    /// Time step, clamped to the configured range; unparseable values keep
    /// the configured one (overrides config file)
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub dt: Option<String>,

    /// Random seed for body generation
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of frames to run before exiting
    #[arg(short = 't', long, value_name = "FRAMES", default_value_t = 600)]
    pub ticks: u32,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Write the effective configuration to the user config directory and exit
    #[arg(long)]
    pub save_config: bool,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        if !Path::new(config_path).exists() {
            return Err(CliError::ConfigNotFound(config_path.clone()));
        }
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load_layered(config_path).map_err(CliError::ConfigLoad)?
    } else {
        SimulationConfig::load_from_user_config()
    };

    apply_overrides(args, &mut config);

    config.validate().map_err(CliError::InvalidOverride)?;

    Ok(config)
}

fn apply_overrides(args: &Args, config: &mut SimulationConfig) {
    if let Some(body_count) = args.bodies {
        println!("Overriding body count to: {body_count}");
        config.scenario.body_count = body_count;
    }

    if let Some(text) = &args.gravity {
        let gravity = config
            .physics
            .gravity_range
            .parse_clamped(text, config.physics.gravitational_constant);
        println!("Overriding gravitational constant to: {gravity}");
        config.physics.gravitational_constant = gravity;
    }

    if let Some(softening) = args.softening {
        println!("Overriding softening length to: {softening}");
        config.physics.softening = softening;
    }

    if let Some(text) = &args.dt {
        let dt = config
            .physics
            .time_step_range
            .parse_clamped(text, config.physics.time_step);
        println!("Overriding time step to: {dt}");
        config.physics.time_step = dt;
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.scenario.seed = Some(seed);
    }
}
