use thiserror::Error;
use tonic::Code;

/// Errors raised while talking to the server.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server does not implement the RPC, typically because it predates
    /// the gRPC search API.
    #[error("{operation} is not supported by this server: {}", source.message())]
    FeatureNotSupported {
        /// RPC name.
        operation: &'static str,
        #[source]
        source: Box<tonic::Status>,
    },

    /// Any other non-OK status.
    #[error("{operation} failed with {:?}: {}", source.code(), source.message())]
    Server {
        /// RPC name.
        operation: &'static str,
        #[source]
        source: Box<tonic::Status>,
    },

    /// Could not reach the gRPC endpoint.
    #[error("failed to connect to '{endpoint}': {message}")]
    ConnectionFailed {
        /// Endpoint URL.
        endpoint: String,
        /// Error message.
        message: String,
    },

    /// The API key cannot be sent as an ASCII header value.
    #[error("api key is not a valid header value")]
    InvalidApiKey,
}

impl TransportError {
    /// Maps a non-OK status returned by `operation`.
    pub fn from_status(operation: &'static str, status: tonic::Status) -> Self {
        match status.code() {
            Code::Unimplemented => TransportError::FeatureNotSupported {
                operation,
                source: Box::new(status),
            },
            _ => TransportError::Server {
                operation,
                source: Box::new(status),
            },
        }
    }

    /// Returns the gRPC status code, if the server answered.
    pub fn code(&self) -> Option<Code> {
        match self {
            TransportError::FeatureNotSupported { source, .. }
            | TransportError::Server { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}
