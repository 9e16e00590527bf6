//! Typed search and aggregate client core for Weaviate's gRPC API.
//!
//! # Public API Surface
//!
//! ## Client
//! - [`Client`], [`Collection`], [`ClientError`] - Validate, build, send, decode
//! - [`ClientConfig`], [`ConfigError`] - Environment-backed connection settings
//!
//! ## Query model
//! - [`QueryOptions`] and the per-mode parameter types ([`NearVectorParams`],
//!   [`NearTextParams`], [`HybridParams`], ...)
//! - `build_*` functions turning them into wire requests
//!
//! ## Vectors
//! - [`NamedVector`], [`TargetVectorSpec`], [`resolve`] - Multi-target vector
//!   resolution shared by near-vector, hybrid and aggregate requests
//!
//! ## Results
//! - [`SearchResponse`], [`DecodedObject`], [`GroupByResult`], [`AggregateResult`]
//!
//! ## Test/Mock Support
//! [`MockTransport`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod constants;
pub mod proto;
pub mod query;
pub mod results;
pub mod transport;
pub mod vectors;

pub use aggregate::{
    AggregateGroup, AggregateParams, AggregateResult, AggregateSearch, GroupedByValue, Metric,
    MetricKind, PropertyAggregation, Statistic, build_aggregate, decode_aggregate_reply,
};
pub use client::{Client, ClientError, Collection};
pub use config::{ClientConfig, ConfigError};
pub use query::{
    Bm25Operator, Bm25Params, ConsistencyLevel, Filter, FilterOperator, FilterValue, FusionType,
    GenerativeQuery, GroupBy, HybridParams, HybridVectorInput, MediaKind, MetadataQuery, Move,
    NearMediaParams, NearObjectParams, NearTextParams, NearVectorParams, Pagination,
    PropertyProjection, QueryError, QueryOptions, ReferenceQuery, Rerank, SortBy, build_bm25,
    build_common, build_hybrid, build_near_media, build_near_object, build_near_text,
    build_near_vector,
};
pub use results::{
    DecodeError, DecodedObject, GroupByResult, ListValue, ObjectMetadata, PropertyValue,
    QueryResult, SearchResponse, decode_group_by_reply, decode_reply, decode_search_reply,
};
#[cfg(any(test, feature = "mock"))]
pub use transport::MockTransport;
pub use transport::{GrpcTransport, Transport, TransportError};
pub use vectors::{
    Combination, NamedVector, ResolvedVectorEncoding, TargetVectorSpec, VectorData, VectorShape,
    resolve,
};
