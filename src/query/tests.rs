use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use uuid::Uuid;

use super::*;
use crate::proto::v1;
use crate::vectors::{NamedVector, TargetVectorSpec, unpack_vector};

const COLLECTION: &str = "Article";

fn options() -> QueryOptions {
    QueryOptions::default()
}

fn named(name: &str) -> NamedVector {
    NamedVector::new(name, vec![0.25, 0.5, 0.75])
}

#[test]
fn test_common_defaults() {
    let request = build_common(COLLECTION, &options());

    assert_eq!(request.collection, COLLECTION);
    assert!(request.tenant.is_empty());
    assert!(request.consistency_level.is_none());
    assert!(request.group_by.is_none());
    assert!(request.generative.is_none());
    assert!(request.uses_127_api);

    let metadata = request.metadata.expect("metadata always requested");
    assert!(metadata.uuid);
    assert!(!metadata.vector);
    assert!(!metadata.certainty);
    assert!(!metadata.creation_time_unix);

    let properties = request.properties.expect("properties always requested");
    assert!(properties.return_all_nonref_properties);
    assert!(properties.ref_properties.is_empty());
}

#[test]
fn test_common_carries_options() {
    let id = Uuid::new_v4();
    let opts = QueryOptions::new()
        .limit(10)
        .offset(5)
        .after(id)
        .sort(SortBy::descending("published"))
        .filter(Filter::equal("category", "science"))
        .tenant("tenantA")
        .consistency_level(ConsistencyLevel::Quorum)
        .rerank("title", Some("space".to_string()))
        .generative(GenerativeQuery::single("Summarize {title}"));

    let request = build_common(COLLECTION, &opts);

    assert_eq!(request.limit, 10);
    assert_eq!(request.offset, 5);
    assert_eq!(request.after, id.to_string());
    assert_eq!(request.tenant, "tenantA");
    assert_eq!(request.consistency_level, Some(v1::ConsistencyLevel::Quorum as i32));
    assert_eq!(request.sort_by.len(), 1);
    assert!(!request.sort_by[0].ascending);
    assert_eq!(request.sort_by[0].path, vec!["published"]);

    let filters = request.filters.unwrap();
    assert_eq!(filters.operator, v1::FilterOperator::Equal as i32);
    assert_eq!(filters.on, vec!["category"]);
    assert_eq!(
        filters.test_value,
        Some(v1::filters::TestValue::ValueText("science".to_string()))
    );

    assert_eq!(request.rerank.unwrap().query.as_deref(), Some("space"));
    let generative = request.generative.unwrap();
    assert_eq!(generative.single_response_prompt, "Summarize {title}");
    assert!(generative.grouped_response_task.is_empty());
}

#[test]
fn test_nested_filters() {
    let filter = Filter::Or(vec![
        Filter::And(vec![
            Filter::condition("wordCount", FilterOperator::GreaterThan, 100i64),
            Filter::is_null("summary", false),
        ]),
        Filter::within_geo_range("location", 52.3, 4.9, 1000.0),
    ]);

    let wire = filter.to_wire();

    assert_eq!(wire.operator, v1::FilterOperator::Or as i32);
    assert_eq!(wire.filters.len(), 2);
    assert_eq!(wire.filters[0].operator, v1::FilterOperator::And as i32);
    assert_eq!(
        wire.filters[0].filters[0].test_value,
        Some(v1::filters::TestValue::ValueInt(100))
    );
    assert_eq!(wire.filters[1].operator, v1::FilterOperator::WithinGeoRange as i32);
}

#[test]
fn test_group_by_decapitalizes_property() {
    let opts = QueryOptions::new().group_by(GroupBy::new("Category", 3, 2));

    let group_by = build_common(COLLECTION, &opts).group_by.unwrap();

    assert_eq!(group_by.path, vec!["category"]);
    assert_eq!(group_by.number_of_groups, 3);
    assert_eq!(group_by.objects_per_group, 2);
}

#[test]
fn test_group_by_counts_clamped_to_i32() {
    let opts = QueryOptions::new().group_by(GroupBy::new("category", u32::MAX, 3_000_000_000));

    let group_by = build_common(COLLECTION, &opts).group_by.unwrap();

    assert_eq!(group_by.number_of_groups, i32::MAX);
    assert_eq!(group_by.objects_per_group, i32::MAX);
}

#[test]
fn test_named_vectors_override_blanket_vector_flag() {
    let metadata = MetadataQuery {
        vector: true,
        ..Default::default()
    }
    .with_vectors(["title"]);

    let request = build_common(COLLECTION, &options().metadata(metadata));

    let wire = request.metadata.unwrap();
    assert!(!wire.vector);
    assert_eq!(wire.vectors, vec!["title"]);
}

#[test]
fn test_blanket_vector_flag_without_names() {
    let metadata = MetadataQuery {
        vector: true,
        ..MetadataQuery::full()
    };

    let wire = build_common(COLLECTION, &options().metadata(metadata))
        .metadata
        .unwrap();

    assert!(wire.vector);
    assert!(wire.distance && wire.certainty && wire.score && wire.is_consistent);
}

#[test]
fn test_reference_projection_nests() {
    let opts = options()
        .properties(PropertyProjection::only(["title"]))
        .reference(
            ReferenceQuery::new("writtenBy")
                .target_collection("Author")
                .properties(PropertyProjection::only(["name"]))
                .reference(ReferenceQuery::new("employer")),
        );

    let properties = build_common(COLLECTION, &opts).properties.unwrap();

    assert!(!properties.return_all_nonref_properties);
    assert_eq!(properties.non_ref_properties, vec!["title"]);
    let written_by = &properties.ref_properties[0];
    assert_eq!(written_by.reference_property, "writtenBy");
    assert_eq!(written_by.target_collection, "Author");
    let nested = written_by.properties.as_ref().unwrap();
    assert_eq!(nested.non_ref_properties, vec!["name"]);
    assert_eq!(nested.ref_properties[0].reference_property, "employer");
    assert!(written_by.metadata.as_ref().unwrap().uuid);
}

#[test]
fn test_near_vector_single_unnamed() {
    let request =
        build_near_vector(COLLECTION, NearVectorParams::unnamed(vec![0.1, 0.2]), &options())
            .unwrap();

    let near_vector = request.near_vector.unwrap();
    assert!(near_vector.targets.is_none());
    assert_eq!(near_vector.vectors.len(), 1);
    assert!(near_vector.vectors[0].name.is_empty());
    assert!(near_vector.vector_for_targets.is_empty());
    assert!(request.hybrid_search.is_none());
}

#[test]
fn test_near_vector_keeps_certainty_and_distance() {
    let params = NearVectorParams::unnamed(vec![0.1])
        .certainty(0.8)
        .distance(0.2);

    let near_vector = build_near_vector(COLLECTION, params, &options())
        .unwrap()
        .near_vector
        .unwrap();

    assert_eq!(near_vector.certainty, Some(0.8));
    assert_eq!(near_vector.distance, Some(0.2));
}

#[test]
fn test_near_vector_per_target() {
    let params = NearVectorParams::new(vec![named("title"), named("body")])
        .target(TargetVectorSpec::average(["title", "body"]));

    let near_vector = build_near_vector(COLLECTION, params, &options())
        .unwrap()
        .near_vector
        .unwrap();

    let targets = near_vector.targets.unwrap();
    assert_eq!(targets.target_vectors, vec!["title", "body"]);
    assert_eq!(targets.combination, v1::CombinationMethod::TypeAverage as i32);
    let names: Vec<_> = near_vector
        .vector_for_targets
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names, vec!["body", "title"]);
    assert!(near_vector.vectors.is_empty());

    let bytes = &near_vector.vector_for_targets[0].vectors[0].vector_bytes;
    let decoded = unpack_vector("body", bytes, v1::VectorType::SingleFp32).unwrap();
    assert_eq!(decoded, named("body").data);
}

#[test]
fn test_near_vector_rejects_duplicate_targets() {
    let params = NearVectorParams::new(vec![named("title")])
        .target(TargetVectorSpec::new(["title", "title"]));

    let err = build_near_vector(COLLECTION, params, &options()).unwrap_err();

    assert!(matches!(err, QueryError::DuplicateTargetVector { .. }));
}

#[test]
fn test_near_vector_requires_vectors() {
    let err = build_near_vector(COLLECTION, NearVectorParams::default(), &options()).unwrap_err();
    assert!(matches!(err, QueryError::Validation { .. }));
}

#[test]
fn test_near_vector_rejects_ragged_multi_vector() {
    let ragged = NamedVector::new("colbert", vec![vec![1.0, 2.0], vec![3.0]]);

    let err = build_near_vector(COLLECTION, NearVectorParams::new(vec![ragged]), &options())
        .unwrap_err();

    assert!(matches!(err, QueryError::Validation { .. }));
}

#[test]
fn test_near_vector_rejects_multi_vector_dimension_over_u16() {
    let wide = NamedVector::new("colbert", vec![vec![0.5; 70_000]]);

    let err =
        build_near_vector(COLLECTION, NearVectorParams::new(vec![wide]), &options()).unwrap_err();

    assert!(matches!(err, QueryError::Validation { .. }));
}

#[test]
fn test_near_vector_accepts_max_u16_multi_vector_dimension() {
    let widest = NamedVector::new("colbert", vec![vec![0.5; u16::MAX as usize]; 2]);

    let near_vector = build_near_vector(COLLECTION, NearVectorParams::new(vec![widest]), &options())
        .unwrap()
        .near_vector
        .unwrap();

    assert_eq!(near_vector.vectors.len(), 1);
    assert_eq!(
        near_vector.vectors[0].r#type,
        v1::VectorType::MultiFp32 as i32
    );
}

#[test]
fn test_near_text_without_move_omits_field() {
    let params = NearTextParams::new(["space travel"]);

    let near_text = build_near_text(COLLECTION, params, &options())
        .unwrap()
        .near_text
        .unwrap();

    assert_eq!(near_text.query, vec!["space travel"]);
    assert!(near_text.move_to.is_none());
    assert!(near_text.move_away.is_none());
}

#[test]
fn test_near_text_with_moves() {
    let object = Uuid::new_v4();
    let params = NearTextParams::new(["space"])
        .move_to(Move::concepts(0.5, ["rockets"]))
        .move_away(Move::objects(0.25, vec![object]));

    let near_text = build_near_text(COLLECTION, params, &options())
        .unwrap()
        .near_text
        .unwrap();

    let move_to = near_text.move_to.unwrap();
    assert_eq!(move_to.force, 0.5);
    assert_eq!(move_to.concepts, vec!["rockets"]);
    assert_eq!(near_text.move_away.unwrap().uuids, vec![object.to_string()]);
}

#[test]
fn test_near_text_rejects_empty_move() {
    let params = NearTextParams::new(["space"]).move_to(Move::concepts(1.0, Vec::<String>::new()));

    let err = build_near_text(COLLECTION, params, &options()).unwrap_err();

    assert!(matches!(err, QueryError::Validation { .. }));
}

#[test]
fn test_near_object() {
    let id = Uuid::new_v4();
    let params = NearObjectParams::new(id).target(TargetVectorSpec::new(["title"]));

    let near_object = build_near_object(COLLECTION, params, &options())
        .unwrap()
        .near_object
        .unwrap();

    assert_eq!(near_object.id, id.to_string());
    assert_eq!(near_object.targets.unwrap().target_vectors, vec!["title"]);
}

#[test]
fn test_near_media_selects_single_field() {
    let payload = vec![0x89, 0x50, 0x4e, 0x47];
    let params = NearMediaParams::new(MediaKind::Thermal, payload.clone());

    let request = build_near_media(COLLECTION, params, &options()).unwrap();

    let thermal = request.near_thermal.expect("thermal field set");
    assert_eq!(BASE64.decode(&thermal.media).unwrap(), payload);
    assert!(request.near_image.is_none());
    assert!(request.near_audio.is_none());
    assert!(request.near_video.is_none());
    assert!(request.near_depth.is_none());
    assert!(request.near_imu.is_none());
}

#[test]
fn test_media_kind_parsing() {
    assert_eq!("Image".parse::<MediaKind>().unwrap(), MediaKind::Image);
    assert_eq!("imu".parse::<MediaKind>().unwrap(), MediaKind::Imu);

    let err = "hologram".parse::<MediaKind>().unwrap_err();
    assert_eq!(
        err,
        QueryError::Unsupported {
            kind: "media",
            name: "hologram".to_string()
        }
    );
}

#[test]
fn test_bm25_or_defaults_minimum_match() {
    let params = Bm25Params::new("rust")
        .properties(["title"])
        .operator(Bm25Operator::Or {
            minimum_match: None,
        });

    let bm25 = build_bm25(COLLECTION, params, &options())
        .unwrap()
        .bm25_search
        .unwrap();

    let operator = bm25.search_operator.unwrap();
    assert_eq!(operator.operator, v1::SearchOperator::Or as i32);
    assert_eq!(operator.minimum_or_tokens_match, Some(1));
    assert_eq!(bm25.properties, vec!["title"]);
}

#[test]
fn test_bm25_and_has_no_minimum() {
    let params = Bm25Params::new("rust").operator(Bm25Operator::And);

    let operator = build_bm25(COLLECTION, params, &options())
        .unwrap()
        .bm25_search
        .unwrap()
        .search_operator
        .unwrap();

    assert_eq!(operator.operator, v1::SearchOperator::And as i32);
    assert!(operator.minimum_or_tokens_match.is_none());
}

#[test]
fn test_hybrid_default_alpha() {
    let hybrid = build_hybrid(COLLECTION, HybridParams::new("rust"), &options())
        .unwrap()
        .hybrid_search
        .unwrap();

    assert_eq!(hybrid.alpha, 0.7);
    assert_eq!(hybrid.query, "rust");
}

#[test]
fn test_hybrid_alpha_forced_without_query() {
    for query in [None, Some(String::new())] {
        let params = HybridParams {
            query,
            alpha: Some(0.2),
            vector: Some(HybridVectorInput::Vectors(vec![NamedVector::unnamed(vec![
                0.1, 0.2,
            ])])),
            ..Default::default()
        };

        let hybrid = build_hybrid(COLLECTION, params, &options())
            .unwrap()
            .hybrid_search
            .unwrap();

        assert_eq!(hybrid.alpha, 1.0);
        assert!(hybrid.query.is_empty());
        assert_eq!(hybrid.vectors.len(), 1);
    }
}

#[test]
fn test_hybrid_explicit_alpha_kept_with_query() {
    let hybrid = build_hybrid(COLLECTION, HybridParams::new("rust").alpha(0.3), &options())
        .unwrap()
        .hybrid_search
        .unwrap();

    assert_eq!(hybrid.alpha, 0.3);
}

#[test]
fn test_hybrid_requires_query_or_vector() {
    let err = build_hybrid(COLLECTION, HybridParams::default(), &options()).unwrap_err();
    assert!(matches!(err, QueryError::Validation { .. }));

    let params = HybridParams {
        query: Some(String::new()),
        vector: Some(HybridVectorInput::Vectors(Vec::new())),
        ..Default::default()
    };
    let err = build_hybrid(COLLECTION, params, &options()).unwrap_err();
    assert!(matches!(err, QueryError::Validation { .. }));
}

#[test]
fn test_hybrid_weighted_named_vectors_use_per_target() {
    let spec = TargetVectorSpec::manual_weights([("title", vec![1.2]), ("body", vec![0.8])]);
    let params = HybridParams::new("rust")
        .vector(HybridVectorInput::Vectors(vec![named("title"), named("body")]))
        .target(spec);

    let hybrid = build_hybrid(COLLECTION, params, &options())
        .unwrap()
        .hybrid_search
        .unwrap();

    let targets = hybrid.targets.unwrap();
    assert_eq!(targets.combination, v1::CombinationMethod::TypeManual as i32);
    assert_eq!(targets.weights_for_targets.len(), 2);
    let near_vector = hybrid.near_vector.unwrap();
    assert!(near_vector.targets.is_none());
    assert_eq!(near_vector.vector_for_targets.len(), 2);
    assert!(hybrid.vectors.is_empty());
}

#[test]
fn test_hybrid_near_vector_subquery_hoists_targets() {
    let sub = NearVectorParams::new(vec![named("title"), named("body")])
        .target(TargetVectorSpec::sum(["title", "body"]))
        .certainty(0.6);
    let params = HybridParams::new("rust").vector(HybridVectorInput::NearVector(sub));

    let hybrid = build_hybrid(COLLECTION, params, &options())
        .unwrap()
        .hybrid_search
        .unwrap();

    assert_eq!(
        hybrid.targets.unwrap().combination,
        v1::CombinationMethod::TypeSum as i32
    );
    let near_vector = hybrid.near_vector.unwrap();
    assert!(near_vector.targets.is_none());
    assert_eq!(near_vector.certainty, Some(0.6));
    assert_eq!(near_vector.vector_for_targets.len(), 2);
}

#[test]
fn test_hybrid_near_text_subquery_inherits_hybrid_target() {
    let sub = NearTextParams::new(["galaxies"]).move_to(Move::concepts(0.4, ["stars"]));
    let params = HybridParams::vector_only(HybridVectorInput::NearText(sub))
        .target(TargetVectorSpec::new(["body"]));

    let hybrid = build_hybrid(COLLECTION, params, &options())
        .unwrap()
        .hybrid_search
        .unwrap();

    assert_eq!(hybrid.alpha, 1.0);
    assert_eq!(hybrid.targets.unwrap().target_vectors, vec!["body"]);
    let near_text = hybrid.near_text.unwrap();
    assert!(near_text.targets.is_none());
    assert!(near_text.move_to.is_some());
}

#[test]
fn test_hybrid_fusion_and_operator() {
    let mut params = HybridParams::new("rust").fusion(FusionType::RelativeScore);
    params.bm25_operator = Some(Bm25Operator::Or {
        minimum_match: Some(2),
    });

    let hybrid = build_hybrid(COLLECTION, params, &options())
        .unwrap()
        .hybrid_search
        .unwrap();

    assert_eq!(hybrid.fusion_type, v1::FusionType::RelativeScore as i32);
    assert_eq!(
        hybrid.bm25_search_operator.unwrap().minimum_or_tokens_match,
        Some(2)
    );
}

#[test]
fn test_hybrid_rejects_ragged_multi_vector() {
    let ragged = NamedVector::new("colbert", vec![vec![1.0, 2.0], vec![3.0]]);
    let params = HybridParams::new("rust").vector(HybridVectorInput::Vectors(vec![ragged]));

    let err = build_hybrid(COLLECTION, params, &options()).unwrap_err();

    assert!(matches!(err, QueryError::Validation { .. }));
}

#[test]
fn test_hybrid_empty_vector_input_is_not_keyword_only() {
    let inputs = [
        HybridVectorInput::Vectors(Vec::new()),
        HybridVectorInput::NearVector(NearVectorParams::new(Vec::new())),
        HybridVectorInput::NearText(NearTextParams::new(Vec::<String>::new())),
    ];

    for input in inputs {
        let params = HybridParams::new("fox").vector(input);
        let err = build_hybrid(COLLECTION, params, &options()).unwrap_err();
        assert!(matches!(err, QueryError::Validation { .. }));
    }
}

#[test]
fn test_hybrid_rejects_target_on_both_levels() {
    let sub = NearVectorParams::new(vec![named("title")]).target(TargetVectorSpec::new(["title"]));
    let params = HybridParams::new("rust")
        .vector(HybridVectorInput::NearVector(sub))
        .target(TargetVectorSpec::new(["body"]));
    let err = build_hybrid(COLLECTION, params, &options()).unwrap_err();
    assert!(matches!(err, QueryError::Validation { .. }));

    let sub = NearTextParams::new(["galaxies"]).target(TargetVectorSpec::new(["title"]));
    let params = HybridParams::vector_only(HybridVectorInput::NearText(sub))
        .target(TargetVectorSpec::new(["title"]));
    let err = build_hybrid(COLLECTION, params, &options()).unwrap_err();
    assert!(matches!(err, QueryError::Validation { .. }));
}
