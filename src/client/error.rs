use thiserror::Error;

use crate::config::ConfigError;
use crate::query::QueryError;
use crate::results::DecodeError;
use crate::transport::TransportError;

/// Any failure of a client operation, tagged by the stage that failed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rejected before anything was sent.
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server replied with data that could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
