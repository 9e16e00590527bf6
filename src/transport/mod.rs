//! Request transport.
//!
//! The client only needs "send this request, give me the reply"; everything
//! about channels, deadlines and authentication stays behind [`Transport`].

pub mod error;
pub mod grpc;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::TransportError;
pub use grpc::GrpcTransport;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;

use crate::proto::v1;

/// Sends fully-built requests and returns raw replies.
pub trait Transport: Send + Sync {
    /// Runs a search RPC.
    fn search(
        &self,
        request: v1::SearchRequest,
    ) -> impl std::future::Future<Output = Result<v1::SearchReply, TransportError>> + Send;

    /// Runs an aggregate RPC.
    fn aggregate(
        &self,
        request: v1::AggregateRequest,
    ) -> impl std::future::Future<Output = Result<v1::AggregateReply, TransportError>> + Send;
}
