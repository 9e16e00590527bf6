//! Explicit conversions from the vector model to wire messages.

use std::collections::BTreeMap;

use crate::proto::v1;

use super::encoding::pack_vector;
use super::model::{Combination, NamedVector, TargetVectorSpec};

pub fn to_wire_combination(combination: Combination) -> v1::CombinationMethod {
    match combination {
        Combination::Unspecified => v1::CombinationMethod::Unspecified,
        Combination::Sum => v1::CombinationMethod::TypeSum,
        Combination::Average => v1::CombinationMethod::TypeAverage,
        Combination::Minimum => v1::CombinationMethod::TypeMin,
        Combination::ManualWeights => v1::CombinationMethod::TypeManual,
        Combination::RelativeScore => v1::CombinationMethod::TypeRelativeScore,
    }
}

/// Builds the `Targets` message. A target with several weights is listed
/// once per weight so the server can pair them positionally.
pub fn to_wire_targets(spec: &TargetVectorSpec) -> v1::Targets {
    let target_vectors = spec
        .targets
        .iter()
        .flat_map(|target| {
            let repeat = spec.weight_count(target).max(1);
            std::iter::repeat_n(target.clone(), repeat)
        })
        .collect();

    let weights_for_targets = spec
        .weight_pairs()
        .into_iter()
        .map(|(target, weight)| v1::WeightsForTarget {
            target: target.to_string(),
            weight,
        })
        .collect();

    v1::Targets {
        target_vectors,
        combination: to_wire_combination(spec.combination) as i32,
        weights_for_targets,
    }
}

pub fn to_wire_vector(vector: &NamedVector) -> v1::Vectors {
    let (vector_bytes, kind) = pack_vector(&vector.data);
    v1::Vectors {
        name: vector.name.clone(),
        vector_bytes,
        r#type: kind as i32,
    }
}

pub fn to_wire_vectors(vectors: &[NamedVector]) -> Vec<v1::Vectors> {
    vectors.iter().map(to_wire_vector).collect()
}

pub fn to_wire_vector_for_targets(
    groups: &BTreeMap<String, Vec<NamedVector>>,
) -> Vec<v1::VectorForTarget> {
    groups
        .iter()
        .map(|(name, vectors)| v1::VectorForTarget {
            name: name.clone(),
            vectors: to_wire_vectors(vectors),
        })
        .collect()
}
