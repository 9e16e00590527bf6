//! Cross-cutting, shared constants.
//!
//! Values here are part of the observable request shape (defaults the server
//! would otherwise infer differently), so changing one is a behaviour change.

/// Hybrid `alpha` used when the caller supplies a query but no alpha.
pub const DEFAULT_HYBRID_ALPHA: f32 = 0.7;

/// Hybrid `alpha` forced when there is no keyword query at all.
pub const PURE_VECTOR_ALPHA: f32 = 1.0;

/// Minimum number of matching tokens sent for a BM25 `OR` operator without
/// an explicit minimum.
pub const DEFAULT_OR_MINIMUM_MATCH: i32 = 1;

/// Name under which the legacy, unnamed vector is exposed in decoded results.
pub const DEFAULT_VECTOR_NAME: &str = "default";

/// Name reserved for the unnamed vector in [`crate::vectors::NamedVector`].
pub const UNNAMED_VECTOR: &str = "";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_GRPC_PORT: u16 = 50051;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bytes per packed `f32` vector component.
pub const F32_BYTES: usize = 4;

/// Bytes per packed `f64` / `i64` list element.
pub const PACKED_64_BYTES: usize = 8;

/// Bytes of the little-endian `u16` dimension prefix on multi-vectors.
pub const MULTI_VECTOR_DIM_BYTES: usize = 2;
