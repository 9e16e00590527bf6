//! Named vectors, target vector specs, and the resolver that picks their
//! wire shape.
//!
//! Every vector-bearing search (near-vector, hybrid, aggregate) goes through
//! [`resolve`] and then the explicit conversions in [`wire`], so the shape
//! decision lives in exactly one place.

pub mod encoding;
pub mod model;
pub mod resolver;
pub mod wire;

#[cfg(test)]
mod tests;

pub use encoding::{pack_vector, unpack_vector};
pub use model::{Combination, NamedVector, TargetVectorSpec, VectorData};
pub use resolver::{ResolvedVectorEncoding, VectorShape, resolve};
pub use wire::{to_wire_targets, to_wire_vector_for_targets, to_wire_vectors};
