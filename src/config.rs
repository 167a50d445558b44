use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::physics::math::Scalar;
use crate::physics::simulation::{PhysicsConstants, WorldBounds};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENVIRONMENT_PREFIX: &str = "GRAVWELL";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub spawn: SpawnConfig,
    pub scenario: ScenarioConfig,
}

/// Inclusive range that user-supplied values are clamped into
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ParameterBounds {
    pub min: Scalar,
    pub max: Scalar,
}

impl ParameterBounds {
    pub const fn new(min: Scalar, max: Scalar) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: Scalar) -> Scalar {
        // `f64::clamp` panics on an inverted range; this never does
        value.max(self.min).min(self.max)
    }

    /// Parse free-form text into a clamped value
    ///
    /// Empty or unparseable text yields `default`, which is returned as-is.
    pub fn parse_clamped(&self, text: &str, default: Scalar) -> Scalar {
        let text = text.trim();
        if text.is_empty() {
            return default;
        }

        match text.parse::<Scalar>() {
            Ok(value) if !value.is_nan() => self.clamp(value),
            _ => default,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravitational_constant: Scalar,
    pub softening: Scalar,
    pub time_step: Scalar,
    pub bounds: Option<WorldBounds>,
    pub gravity_range: ParameterBounds,
    pub time_step_range: ParameterBounds,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 10.0,
            softening: 0.1,
            time_step: 0.05,
            bounds: None,
            gravity_range: ParameterBounds::new(0.1, 10_000.0),
            time_step_range: ParameterBounds::new(0.001, 1.0),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub default_mass: Scalar,
    pub mass_range: ParameterBounds,
    /// Spawned velocities are uniform in `[-random_speed, random_speed]` per axis
    pub random_speed: Scalar,
    /// Extra pick radius for hit testing
    pub hit_tolerance: Scalar,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            default_mass: 100.0,
            mass_range: ParameterBounds::new(1.0, 10_000.0),
            random_speed: 10.0,
            hit_tolerance: 20.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub body_count: usize,
    pub seed: Option<u64>,
    pub width: Scalar,
    pub height: Scalar,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            body_count: 40,
            seed: None,
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => config,
                    Err(e) => {
                        warn!("{} in {}. Using defaults.", e, path.display());
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Location of the per-user configuration file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "gravwell")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Defaults, overlaid with the file at `path` (if present) and then with
    /// `GRAVWELL_<SECTION>__<KEY>` environment variables
    pub fn load_layered(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let loaded = config::Config::builder()
            .add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENVIRONMENT_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Layered load from the user configuration directory, falling back to defaults
    pub fn load_from_user_config() -> Self {
        let Some(path) = Self::user_config_path() else {
            warn!("No user configuration directory available. Using defaults.");
            return Self::default();
        };

        match Self::load_layered(&path) {
            Ok(config) => {
                debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save configuration to a file, creating missing parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to the user configuration directory
    pub fn save_to_user_config(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::user_config_path().ok_or(ConfigError::NoConfigDirectory)?;
        self.save(&path)?;
        Ok(path)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;

        if !physics.gravitational_constant.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "gravitational_constant must be finite, got {}",
                physics.gravitational_constant
            )));
        }
        if !(physics.softening.is_finite() && physics.softening > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "softening must be positive, got {}",
                physics.softening
            )));
        }
        if !(physics.time_step.is_finite() && physics.time_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "time_step must be positive, got {}",
                physics.time_step
            )));
        }
        if physics.time_step_range.min <= 0.0 {
            return Err(ConfigError::Invalid(
                "time_step_range.min must be positive".to_string(),
            ));
        }
        if let Some(bounds) = physics.bounds
            && !(bounds.width > 0.0 && bounds.height > 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "bounds must have positive extent, got {} x {}",
                bounds.width, bounds.height
            )));
        }

        for (name, range) in [
            ("gravity_range", physics.gravity_range),
            ("time_step_range", physics.time_step_range),
            ("mass_range", self.spawn.mass_range),
        ] {
            if range.min.is_nan() || range.max.is_nan() || range.min > range.max {
                return Err(ConfigError::Invalid(format!(
                    "{name} is empty: [{}, {}]",
                    range.min, range.max
                )));
            }
        }

        if self.spawn.mass_range.min.is_nan() || self.spawn.mass_range.min <= 0.0 {
            return Err(ConfigError::Invalid(
                "mass_range.min must be positive".to_string(),
            ));
        }
        if !self.spawn.random_speed.is_finite() || self.spawn.random_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "random_speed must be finite and non-negative, got {}",
                self.spawn.random_speed
            )));
        }

        let scenario = &self.scenario;
        for (name, extent) in [("width", scenario.width), ("height", scenario.height)] {
            if !extent.is_finite() || extent < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "scenario {name} must be finite and non-negative, got {extent}"
                )));
            }
        }

        Ok(())
    }

    /// Constants for the physics engine
    pub fn physics_constants(&self) -> PhysicsConstants {
        PhysicsConstants {
            gravitational_constant: self.physics.gravitational_constant,
            softening: self.physics.softening,
            time_step: self.physics.time_step,
            bounds: self.physics.bounds,
        }
    }

    /// Mass for newly spawned bodies, clamped into the allowed range
    pub fn spawn_mass(&self) -> Scalar {
        self.spawn.mass_range.clamp(self.spawn.default_mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());

        let constants = config.physics_constants();
        assert_eq!(constants.gravitational_constant, 10.0);
        assert_eq!(constants.softening, 0.1);
        assert_eq!(constants.time_step, 0.05);
        assert_eq!(constants.bounds, None);
    }

    #[test]
    fn test_parameter_bounds_parse_clamped() {
        let bounds = ParameterBounds::new(1.0, 1000.0);

        assert_eq!(bounds.parse_clamped("100", 10.0), 100.0);
        assert_eq!(bounds.parse_clamped("abc", 10.0), 10.0);
        assert_eq!(bounds.parse_clamped("5000", 10.0), 1000.0);
        assert_eq!(bounds.parse_clamped("-3", 10.0), 1.0);
        assert_eq!(bounds.parse_clamped("", 10.0), 10.0);
        assert_eq!(bounds.parse_clamped(" 42.5 ", 10.0), 42.5);
        assert_eq!(bounds.parse_clamped("NaN", 10.0), 10.0);
    }

    #[test]
    fn test_toml_round_trip_with_bounds() {
        let mut config = SimulationConfig::default();
        config.physics.bounds = Some(WorldBounds::new(1280.0, 720.0));
        config.scenario.seed = Some(42);

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: SimulationConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: SimulationConfig = toml::from_str(
            r#"
            [physics]
            gravitational_constant = 1.0

            [scenario]
            body_count = 3
            "#,
        )
        .unwrap();

        assert_eq!(parsed.physics.gravitational_constant, 1.0);
        assert_eq!(parsed.physics.softening, 0.1);
        assert_eq!(parsed.scenario.body_count, 3);
        assert_eq!(parsed.spawn, SpawnConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SimulationConfig::default();
        config.physics.softening = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SimulationConfig::default();
        config.physics.time_step = -0.1;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.spawn.mass_range = ParameterBounds::new(10.0, 1.0);
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.physics.bounds = Some(WorldBounds::new(0.0, 10.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unusable_scenario() {
        let mut config = SimulationConfig::default();
        config.scenario.width = -10.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SimulationConfig::default();
        config.scenario.height = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.spawn.random_speed = f64::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.spawn.random_speed = -1.0;
        assert!(config.validate().is_err());

        // Degenerate but usable: everything starts at the origin, at rest
        let mut config = SimulationConfig::default();
        config.scenario.width = 0.0;
        config.scenario.height = 0.0;
        config.spawn.random_speed = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_spawn_mass_is_clamped() {
        let mut config = SimulationConfig::default();
        config.spawn.default_mass = 1e9;
        assert_eq!(config.spawn_mass(), 10_000.0);
    }

    #[test]
    fn test_save_and_load_layered() {
        let path = std::env::temp_dir().join(format!(
            "gravwell-config-test-{}.toml",
            std::process::id()
        ));

        let mut config = SimulationConfig::default();
        config.physics.gravitational_constant = 3.5;
        config.scenario.body_count = 7;
        config.save(&path).unwrap();

        let loaded = SimulationConfig::load_layered(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.physics.gravitational_constant, 3.5);
        assert_eq!(loaded.scenario.body_count, 7);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("gravwell-nested-{}", std::process::id()));
        let path = dir.join("a").join("b").join(CONFIG_FILE_NAME);

        SimulationConfig::default().save(&path).unwrap();
        let loaded = SimulationConfig::load_or_default(&path);
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(loaded, SimulationConfig::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = std::env::temp_dir().join(format!(
            "gravwell-env-test-{}.toml",
            std::process::id()
        ));
        let mut config = SimulationConfig::default();
        config.spawn.hit_tolerance = 5.0;
        config.save(&path).unwrap();

        // No other test reads hit_tolerance through the layered loader
        unsafe { std::env::set_var("GRAVWELL_SPAWN__HIT_TOLERANCE", "35") };
        let loaded = SimulationConfig::load_layered(&path);
        unsafe { std::env::remove_var("GRAVWELL_SPAWN__HIT_TOLERANCE") };
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.unwrap().spawn.hit_tolerance, 35.0);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = SimulationConfig::load_or_default("/nonexistent/gravwell/config.toml");
        assert_eq!(config, SimulationConfig::default());
    }
}
