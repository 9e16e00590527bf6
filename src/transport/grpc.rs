use tonic::client::Grpc;
use tonic::metadata::AsciiMetadataValue;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::proto::{AGGREGATE_PATH, SEARCH_PATH, v1};

use super::Transport;
use super::error::TransportError;

const AUTHORIZATION: &str = "authorization";

/// Unary gRPC transport over a shared tonic channel.
#[derive(Clone)]
pub struct GrpcTransport {
    grpc: Grpc<Channel>,
    endpoint: String,
    auth: Option<AsciiMetadataValue>,
}

impl GrpcTransport {
    /// Connects to the gRPC endpoint described by `config`.
    #[instrument(skip(config), fields(endpoint = %config.grpc_endpoint()))]
    pub async fn connect(config: &ClientConfig) -> Result<Self, TransportError> {
        let endpoint = config.grpc_endpoint();

        let channel = Endpoint::from_shared(endpoint.clone())
            .map_err(|e| TransportError::ConnectionFailed {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .connect()
            .await
            .map_err(|e| TransportError::ConnectionFailed {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        let auth = config
            .api_key
            .as_deref()
            .map(|key| AsciiMetadataValue::try_from(format!("Bearer {key}")))
            .transpose()
            .map_err(|_| TransportError::InvalidApiKey)?;

        debug!(authenticated = auth.is_some(), "Connected gRPC channel");

        Ok(Self {
            grpc: Grpc::new(channel),
            endpoint,
            auth,
        })
    }

    /// Returns the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn unary<Req, Resp>(
        &self,
        operation: &'static str,
        path: &'static str,
        message: Req,
    ) -> Result<Resp, TransportError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.grpc.clone();
        grpc.ready()
            .await
            .map_err(|e| TransportError::ConnectionFailed {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        let mut request = tonic::Request::new(message);
        if let Some(auth) = &self.auth {
            request.metadata_mut().insert(AUTHORIZATION, auth.clone());
        }

        let codec = tonic_prost::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(path);

        grpc.unary(request, path, codec)
            .await
            .map(tonic::Response::into_inner)
            .map_err(|status| TransportError::from_status(operation, status))
    }
}

impl Transport for GrpcTransport {
    async fn search(&self, request: v1::SearchRequest) -> Result<v1::SearchReply, TransportError> {
        self.unary("search", SEARCH_PATH, request).await
    }

    async fn aggregate(
        &self,
        request: v1::AggregateRequest,
    ) -> Result<v1::AggregateReply, TransportError> {
        self.unary("aggregate", AGGREGATE_PATH, request).await
    }
}
