//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid {name} '{value}': must be between 1 and 65535")]
    InvalidPort { name: &'static str, value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse {name} '{value}': {source}")]
    PortParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Timeout string could not be parsed as whole seconds.
    #[error("failed to parse timeout '{value}': {source}")]
    TimeoutParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Timeout must be at least one second.
    #[error("invalid timeout '{value}': must be greater than zero")]
    InvalidTimeout { value: String },

    #[error("host must not be empty")]
    EmptyHost,
}
