use super::*;
use crate::proto::v1;
use crate::query::QueryError;
use crate::results::DecodeError;

fn vector(name: &str, seed: f32) -> NamedVector {
    NamedVector::new(name, vec![seed, seed + 0.1, seed + 0.2])
}

#[test]
fn test_single_default_vector_without_spec() {
    let v = NamedVector::unnamed(vec![0.1, 0.2, 0.3]);

    let resolved = resolve(None, vec![v.clone()]);

    assert_eq!(resolved.shape(), VectorShape::Flat);
    assert_eq!(resolved.flat, Some(vec![v]));
    assert!(resolved.per_target.is_none());

    let targets = resolved.targets.expect("targets should be synthesized");
    assert_eq!(targets.targets, vec![String::new()]);
    assert_eq!(targets.combination, Combination::Unspecified);
}

#[test]
fn test_single_named_vector_with_single_target() {
    let v = vector("title", 1.0);

    let resolved = resolve(Some(TargetVectorSpec::new(["title"])), vec![v.clone()]);

    assert_eq!(resolved.flat, Some(vec![v]));
    assert_eq!(resolved.targets.unwrap().targets, vec!["title".to_string()]);
}

#[test]
fn test_no_spec_single_named_vector_targets_its_name() {
    let resolved = resolve(None, vec![vector("body", 0.5)]);

    assert_eq!(resolved.shape(), VectorShape::Flat);
    assert_eq!(resolved.targets.unwrap().targets, vec!["body".to_string()]);
}

#[test]
fn test_bijection_uses_per_target_sorted() {
    let spec = TargetVectorSpec::sum(["title", "body", "abstract"]);
    let vectors = vec![vector("title", 1.0), vector("body", 2.0), vector("abstract", 3.0)];

    let resolved = resolve(Some(spec), vectors);

    assert_eq!(resolved.shape(), VectorShape::PerTarget);
    let groups = resolved.per_target.unwrap();
    let names: Vec<_> = groups.keys().cloned().collect();
    assert_eq!(names, vec!["abstract", "body", "title"]);
    assert!(groups.values().all(|g| g.len() == 1));
    assert!(resolved.flat.is_none());
}

#[test]
fn test_no_spec_multiple_names_uses_per_target() {
    let resolved = resolve(None, vec![vector("b", 1.0), vector("a", 2.0)]);

    assert_eq!(resolved.shape(), VectorShape::PerTarget);
    assert_eq!(
        resolved.targets.unwrap().targets,
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn test_two_named_targets_manual_weights() {
    let spec = TargetVectorSpec::manual_weights([("title", vec![1.2]), ("body", vec![0.8])]);
    let vectors = vec![vector("title", 1.0), vector("body", 2.0)];

    let resolved = resolve(Some(spec.clone()), vectors);

    let groups = resolved.per_target.expect("per-target shape");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["title"].len(), 1);
    assert_eq!(groups["body"].len(), 1);
    assert_eq!(resolved.targets, Some(spec));
}

#[test]
fn test_multiple_vectors_under_one_target() {
    let spec = TargetVectorSpec::sum(["title"]);
    let first = vector("title", 1.0);
    let second = vector("title", 2.0);

    let resolved = resolve(Some(spec), vec![first.clone(), second.clone()]);

    let groups = resolved.per_target.expect("per-target shape");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups["title"], vec![first, second]);
}

#[test]
fn test_weight_mismatch_falls_back_to_flat() {
    for spec in [
        TargetVectorSpec::manual_weights([("title", vec![1.0, 2.0]), ("body", vec![1.0])]),
        TargetVectorSpec::relative_score([("title", vec![1.0, 2.0]), ("body", vec![1.0])]),
    ] {
        let vectors = vec![vector("title", 1.0), vector("body", 2.0)];

        let resolved = resolve(Some(spec), vectors.clone());

        assert_eq!(resolved.shape(), VectorShape::Flat);
        assert_eq!(resolved.flat, Some(vectors));
    }
}

#[test]
fn test_stacked_vectors_with_matching_weights() {
    let spec = TargetVectorSpec::manual_weights([("title", vec![0.3, 0.7]), ("body", vec![1.0])]);
    let vectors = vec![vector("title", 1.0), vector("body", 2.0), vector("title", 3.0)];

    let resolved = resolve(Some(spec), vectors);

    let groups = resolved.per_target.expect("per-target shape");
    assert_eq!(groups["title"].len(), 2);
    assert_eq!(groups["title"][0], vector("title", 1.0));
    assert_eq!(groups["title"][1], vector("title", 3.0));
    assert_eq!(groups["body"].len(), 1);
}

#[test]
fn test_mismatched_names_fall_back_to_flat_in_input_order() {
    let spec = TargetVectorSpec::new(["title", "body"]);
    let vectors = vec![vector("title", 1.0), vector("summary", 2.0)];

    let resolved = resolve(Some(spec), vectors.clone());

    assert_eq!(resolved.flat, Some(vectors));
}

#[test]
fn test_empty_vectors_keep_targets() {
    let spec = TargetVectorSpec::new(["title"]);

    let resolved = resolve(Some(spec.clone()), Vec::new());

    assert_eq!(resolved.shape(), VectorShape::Empty);
    assert_eq!(resolved.targets, Some(spec));
}

#[test]
fn test_empty_vectors_without_spec() {
    let resolved = resolve(None, Vec::new());
    assert_eq!(resolved, ResolvedVectorEncoding::default());
}

#[test]
fn test_duplicate_targets_rejected() {
    let spec = TargetVectorSpec::new(["title", "body", "title"]);

    let err = spec.validate().unwrap_err();

    assert!(matches!(err, QueryError::DuplicateTargetVector { ref name } if name == "title"));
    assert!(TargetVectorSpec::new(["title", "body"]).validate().is_ok());
}

#[test]
fn test_weight_pairs_follow_target_order() {
    let spec = TargetVectorSpec::manual_weights([("b", vec![0.5, 0.25]), ("a", vec![2.0])]);

    assert_eq!(spec.weight_pairs(), vec![("b", 0.5), ("b", 0.25), ("a", 2.0)]);
}

#[test]
fn test_wire_targets_repeat_weighted_names() {
    let spec = TargetVectorSpec::manual_weights([("title", vec![0.3, 0.7]), ("body", vec![1.0])]);

    let wire = to_wire_targets(&spec);

    assert_eq!(wire.target_vectors, vec!["title", "title", "body"]);
    assert_eq!(wire.combination, v1::CombinationMethod::TypeManual as i32);
    assert_eq!(wire.weights_for_targets.len(), 3);
    assert_eq!(wire.weights_for_targets[1].target, "title");
    assert_eq!(wire.weights_for_targets[1].weight, 0.7);
}

#[test]
fn test_pack_unpack_single() {
    let data = VectorData::Single(vec![0.5, -1.25, 3.0]);

    let (bytes, kind) = pack_vector(&data);

    assert_eq!(kind, v1::VectorType::SingleFp32);
    assert_eq!(bytes.len(), 12);
    assert_eq!(unpack_vector("v", &bytes, kind).unwrap(), data);
}

#[test]
fn test_pack_unpack_multi() {
    let data = VectorData::Multi(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);

    let (bytes, kind) = pack_vector(&data);

    assert_eq!(kind, v1::VectorType::MultiFp32);
    assert_eq!(&bytes[..2], &2u16.to_le_bytes());
    assert_eq!(unpack_vector("colbert", &bytes, kind).unwrap(), data);
}

#[test]
fn test_unpack_rejects_truncated_bytes() {
    let err = unpack_vector("v", &[0, 0, 128], v1::VectorType::SingleFp32).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedVector { len: 3, .. }));

    let mut bytes = 2u16.to_le_bytes().to_vec();
    bytes.extend_from_slice(&1.0f32.to_le_bytes());
    let err = unpack_vector("m", &bytes, v1::VectorType::MultiFp32).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedVector { .. }));
}
