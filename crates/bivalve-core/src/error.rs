//! Error types for the bivalve engine.
//!
//! Every failure the engine can report is raised before or during a run and
//! propagated to the caller; nothing is retried.

use thiserror::Error;

/// Main error type for configuration and simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Horizon, timestep or step count unusable for integration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required key is absent from a parameter or initial-condition table.
    #[error("missing {table} key `{key}`")]
    MissingKey { table: &'static str, key: String },

    /// A key that no parameter or pool answers to.
    #[error("unknown {table} key `{key}`")]
    UnknownKey { table: &'static str, key: String },

    /// A parameter value that cannot give physically meaningful output.
    #[error("parameter {name} = {value} is invalid: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// SOMA went negative and is about to be raised to a fractional exponent.
    #[error("numerical domain error at step {step}: {pool} = {value} cannot be raised to a fractional exponent")]
    NegativeMass {
        pool: &'static str,
        step: usize,
        value: f64,
    },

    /// Tabulated forcing rejected on construction.
    #[error("invalid forcing: {0}")]
    InvalidForcing(String),

    /// Name that does not match any policy variant.
    #[error("unknown {kind} policy `{value}`")]
    UnknownPolicy { kind: &'static str, value: String },

    /// Configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, ModelError>;

impl ModelError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Creates a new missing-key error.
    #[must_use]
    pub fn missing_key<S: Into<String>>(table: &'static str, key: S) -> Self {
        Self::MissingKey {
            table,
            key: key.into(),
        }
    }

    /// Creates a new unknown-key error.
    #[must_use]
    pub fn unknown_key<S: Into<String>>(table: &'static str, key: S) -> Self {
        Self::UnknownKey {
            table,
            key: key.into(),
        }
    }

    /// Creates a new forcing error.
    #[must_use]
    pub fn invalid_forcing<S: Into<String>>(msg: S) -> Self {
        Self::InvalidForcing(msg.into())
    }
}

impl From<toml::de::Error> for ModelError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}
