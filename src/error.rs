//! Error types
//!
//! The physics pipeline itself has no failure modes; errors only surface at
//! the boundaries where outside data enters the engine.

use std::fmt;

use crate::physics::math::Scalar;

/// Rejection reasons for a body entering the collection from outside
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnError {
    /// Mass is zero, negative, or NaN
    NonPositiveMass(Scalar),
    /// Mass is infinite
    NonFiniteMass(Scalar),
    /// A position component is NaN or infinite
    NonFinitePosition,
    /// A velocity component is NaN or infinite
    NonFiniteVelocity,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::NonPositiveMass(mass) => write!(f, "mass must be positive, got {mass}"),
            SpawnError::NonFiniteMass(mass) => write!(f, "mass must be finite, got {mass}"),
            SpawnError::NonFinitePosition => write!(f, "position must be finite"),
            SpawnError::NonFiniteVelocity => write!(f, "velocity must be finite"),
        }
    }
}

impl std::error::Error for SpawnError {}

/// Configuration loading and saving errors
#[derive(Debug)]
pub enum ConfigError {
    /// No platform configuration directory could be determined
    NoConfigDirectory,
    /// Reading or writing the file failed
    Io(std::io::Error),
    /// The layered configuration could not be built or deserialized
    Load(config::ConfigError),
    /// The configuration could not be serialized to TOML
    Serialize(toml::ser::Error),
    /// A value is outside the range the engine accepts
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoConfigDirectory => write!(f, "no configuration directory available"),
            ConfigError::Io(err) => write!(f, "configuration file I/O failed: {err}"),
            ConfigError::Load(err) => write!(f, "failed to load configuration: {err}"),
            ConfigError::Serialize(err) => write!(f, "failed to serialize configuration: {err}"),
            ConfigError::Invalid(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Load(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::NoConfigDirectory | ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
