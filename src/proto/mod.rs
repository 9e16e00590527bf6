//! Wire types for the binary RPC API.
//!
//! [`v1`] mirrors the server's `weaviate.v1` protocol buffers for the
//! messages this crate builds and decodes. Outside the builders, decoders and
//! [`crate::transport`], callers should not need these types directly.

pub mod v1;

/// Unary RPC path for object search.
pub const SEARCH_PATH: &str = "/weaviate.v1.Weaviate/Search";

/// Unary RPC path for aggregation.
pub const AGGREGATE_PATH: &str = "/weaviate.v1.Weaviate/Aggregate";
