//! End-to-end search flows through the public API against the mock transport.

mod common;

use common::{ARTICLE, HitBuilder, reply};
use uuid::Uuid;
use weave::proto::v1;
use weave::{
    Client, Combination, Filter, GenerativeQuery, HybridParams, HybridVectorInput, MetadataQuery,
    MockTransport, NamedVector, NearVectorParams, QueryOptions, SortBy, TargetVectorSpec,
    VectorData,
};

const ID_A: &str = "6f3c2c2e-8b7a-4a57-9a6e-0f6a8b1c9d01";
const ID_B: &str = "0d6f7a1e-5c3b-4e2d-8f9a-1b2c3d4e5f60";

#[tokio::test]
async fn test_multi_target_near_vector_flow() {
    let client = Client::new(MockTransport::new());
    client
        .transport()
        .push_search_reply(reply(vec![
            HitBuilder::new(ID_A)
                .title("Fearless concurrency")
                .distance(0.12)
                .vector("title", VectorData::Single(vec![0.1, 0.2]))
                .build(),
            HitBuilder::new(ID_B).title("Zero-cost abstractions").build(),
        ]))
        .await;

    let params = NearVectorParams::new(vec![
        NamedVector::new("title", vec![0.1, 0.2]),
        NamedVector::new("body", vec![0.3, 0.4]),
    ])
    .target(TargetVectorSpec::manual_weights([
        ("title", vec![0.7]),
        ("body", vec![0.3]),
    ]));

    let options = QueryOptions::new()
        .limit(10)
        .filter(Filter::equal("published", true))
        .sort(SortBy::descending("rating"))
        .metadata(MetadataQuery::full().with_vectors(["title"]));

    let response = client
        .collection(ARTICLE)
        .near_vector(params, options)
        .await
        .expect("search should succeed");

    let result = response.into_objects().expect("flat result");
    assert_eq!(result.objects.len(), 2);
    assert_eq!(result.objects[0].id, Uuid::parse_str(ID_A).unwrap());
    assert_eq!(result.objects[0].metadata.distance, Some(0.12));
    assert_eq!(
        result.objects[0].vectors.get("title"),
        Some(&VectorData::Single(vec![0.1, 0.2]))
    );
    assert_eq!(result.objects[1].metadata.distance, None);

    let sent = client.transport().search_requests().await;
    let near = sent[0].near_vector.as_ref().expect("near vector payload");

    assert_eq!(near.vector_for_targets.len(), 2);
    assert!(near.vectors.is_empty());

    let targets = near.targets.as_ref().expect("targets");
    assert_eq!(targets.combination, v1::CombinationMethod::TypeManual as i32);
    assert_eq!(targets.weights_for_targets.len(), 2);

    let metadata = sent[0].metadata.as_ref().expect("metadata request");
    assert!(!metadata.vector);
    assert_eq!(metadata.vectors, vec!["title".to_string()]);
    assert_eq!(sent[0].sort_by.len(), 1);
    assert!(sent[0].filters.is_some());
}

#[tokio::test]
async fn test_vector_only_hybrid_flow() {
    let client = Client::new(MockTransport::new());

    let params = HybridParams::vector_only(HybridVectorInput::Vectors(vec![NamedVector::new(
        "title",
        vec![1.0, 0.0],
    )]))
    .target(TargetVectorSpec::sum(["title"]).with_combination(Combination::Sum));

    client
        .collection(ARTICLE)
        .hybrid(params, QueryOptions::new())
        .await
        .expect("hybrid should succeed");

    let sent = client.transport().search_requests().await;
    let hybrid = sent[0].hybrid_search.as_ref().expect("hybrid payload");

    assert_eq!(hybrid.query, "");
    assert_eq!(hybrid.alpha, 1.0);
    assert_eq!(hybrid.vectors.len(), 1);
    assert!(hybrid.targets.is_some());
}

#[tokio::test]
async fn test_generative_flow() {
    let client = Client::new(MockTransport::new());
    let mut grouped = reply(vec![HitBuilder::new(ID_A).title("Macros").build()]);
    grouped.generative_grouped_result = Some("A summary of macros".to_string());
    client.transport().push_search_reply(grouped).await;

    let result = client
        .collection(ARTICLE)
        .bm25(
            weave::Bm25Params::new("macro"),
            QueryOptions::new().generative(GenerativeQuery::grouped("Summarize these")),
        )
        .await
        .unwrap()
        .into_objects()
        .unwrap();

    assert_eq!(result.generated.as_deref(), Some("A summary of macros"));

    let sent = client.transport().search_requests().await;
    let generative = sent[0].generative.as_ref().expect("generative request");
    assert_eq!(generative.grouped_response_task, "Summarize these");
}
