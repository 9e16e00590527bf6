//! Environment-backed client configuration.
//!
//! Every setting has a default. Override with `WEAVE_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::time::Duration;

use crate::constants::{DEFAULT_GRPC_PORT, DEFAULT_HOST, DEFAULT_HTTP_PORT, DEFAULT_TIMEOUT_SECS};

/// Connection settings for a Weaviate instance.
///
/// Use [`ClientConfig::from_env`] to read `WEAVE_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server host name or address. Default: `localhost`.
    pub host: String,

    /// REST port. Default: `8080`.
    pub http_port: u16,

    /// gRPC port. Default: `50051`.
    pub grpc_port: u16,

    /// Sent as a bearer token when set.
    pub api_key: Option<String>,

    /// Per-request deadline, also used as the connect timeout. Default: 30s.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            http_port: DEFAULT_HTTP_PORT,
            grpc_port: DEFAULT_GRPC_PORT,
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    const ENV_HOST: &'static str = "WEAVE_HOST";
    const ENV_HTTP_PORT: &'static str = "WEAVE_HTTP_PORT";
    const ENV_GRPC_PORT: &'static str = "WEAVE_GRPC_PORT";
    const ENV_API_KEY: &'static str = "WEAVE_API_KEY";
    const ENV_TIMEOUT_SECS: &'static str = "WEAVE_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = Self::parse_string_from_env(Self::ENV_HOST, defaults.host);
        let http_port = Self::parse_port_from_env(Self::ENV_HTTP_PORT, defaults.http_port)?;
        let grpc_port = Self::parse_port_from_env(Self::ENV_GRPC_PORT, defaults.grpc_port)?;
        let api_key = Self::parse_optional_string_from_env(Self::ENV_API_KEY);
        let timeout = Self::parse_timeout_from_env(defaults.timeout)?;

        Ok(Self {
            host,
            http_port,
            grpc_port,
            api_key,
            timeout,
        })
    }

    /// Creates a config for `host` with default ports.
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"http://{host}:{grpc_port}"`.
    pub fn grpc_endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.grpc_port)
    }

    /// Returns `"http://{host}:{http_port}"`.
    pub fn http_endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.http_port)
    }

    fn parse_port_from_env(var_name: &'static str, default: u16) -> Result<u16, ConfigError> {
        match env::var(var_name) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    name: var_name,
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort {
                        name: var_name,
                        value,
                    });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_TIMEOUT_SECS) {
            Ok(value) => {
                let secs: u64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::TimeoutParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout { value });
                }

                Ok(Duration::from_secs(secs))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }
}
