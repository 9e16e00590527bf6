//! High-level client: validate, build, send, decode.

pub mod collection;
pub mod error;


pub use collection::Collection;
pub use error::ClientError;

use std::sync::Arc;

use tracing::instrument;

use crate::config::ClientConfig;
use crate::transport::{GrpcTransport, Transport};

/// Entry point. Cheap to clone; clones share the transport.
pub struct Client<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Wraps an existing transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn collection(&self, name: impl Into<String>) -> Collection<T> {
        Collection::new(name.into(), Arc::clone(&self.transport))
    }
}

impl Client<GrpcTransport> {
    /// Validates `config` and opens a gRPC channel.
    #[instrument(skip(config), fields(host = %config.host))]
    pub async fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let transport = GrpcTransport::connect(config).await?;
        Ok(Self::new(transport))
    }
}
