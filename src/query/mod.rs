//! Search query model and request builders.
//!
//! One `build_*` function per search mode. Each validates its input, runs the
//! vector target resolver where vectors are involved, and attaches exactly one
//! mode-specific payload to the skeleton produced by [`build_common`].

pub mod builder;
pub mod error;
pub mod filter;
pub mod options;
pub mod params;

#[cfg(test)]
mod tests;

pub use builder::{
    build_bm25, build_common, build_hybrid, build_near_media, build_near_object, build_near_text,
    build_near_vector,
};
pub use error::QueryError;
pub use filter::{Filter, FilterOperator, FilterValue};
pub use options::{
    ConsistencyLevel, GenerativeQuery, GroupBy, MetadataQuery, Pagination, PropertyProjection,
    QueryOptions, ReferenceQuery, Rerank, SortBy,
};
pub use params::{
    Bm25Operator, Bm25Params, FusionType, HybridParams, HybridVectorInput, MediaKind, Move,
    NearMediaParams, NearObjectParams, NearTextParams, NearVectorParams,
};
