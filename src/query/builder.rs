use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::constants::{DEFAULT_HYBRID_ALPHA, DEFAULT_OR_MINIMUM_MATCH, PURE_VECTOR_ALPHA};
use crate::proto::v1;
use crate::vectors::{
    NamedVector, ResolvedVectorEncoding, TargetVectorSpec, VectorData, resolve, to_wire_targets,
    to_wire_vector_for_targets, to_wire_vectors,
};

use super::error::QueryError;
use super::options::{GroupBy, MetadataQuery, PropertyProjection, QueryOptions, ReferenceQuery};
use super::params::{
    Bm25Operator, Bm25Params, FusionType, HybridParams, HybridVectorInput, MediaKind, Move,
    NearMediaParams, NearObjectParams, NearTextParams, NearVectorParams,
};

/// Builds the mode-independent part of a search request.
pub fn build_common(collection: &str, options: &QueryOptions) -> v1::SearchRequest {
    let pagination = &options.pagination;

    v1::SearchRequest {
        collection: collection.to_string(),
        tenant: options.tenant.clone().unwrap_or_default(),
        consistency_level: options.consistency_level.map(|c| c.to_wire() as i32),
        properties: Some(to_wire_properties(&options.properties, &options.references)),
        metadata: Some(to_wire_metadata(&options.metadata)),
        group_by: options.group_by.as_ref().map(to_wire_group_by),
        limit: pagination.limit.unwrap_or_default(),
        offset: pagination.offset.unwrap_or_default(),
        autocut: pagination.autocut.unwrap_or_default(),
        after: pagination.after.map(|id| id.to_string()).unwrap_or_default(),
        sort_by: options
            .sort
            .iter()
            .map(|s| v1::SortBy {
                ascending: s.ascending,
                path: vec![s.property.clone()],
            })
            .collect(),
        filters: options.filter.as_ref().map(|f| f.to_wire()),
        generative: options
            .generative
            .as_ref()
            .filter(|g| !g.is_empty())
            .map(|g| v1::GenerativeSearch {
                single_response_prompt: g.single_prompt.clone().unwrap_or_default(),
                grouped_response_task: g.grouped_task.clone().unwrap_or_default(),
                grouped_properties: g.grouped_properties.clone(),
            }),
        rerank: options.rerank.as_ref().map(|r| v1::Rerank {
            property: r.property.clone(),
            query: r.query.clone(),
        }),
        uses_123_api: true,
        uses_125_api: true,
        uses_127_api: true,
        ..Default::default()
    }
}

pub fn build_near_vector(
    collection: &str,
    params: NearVectorParams,
    options: &QueryOptions,
) -> Result<v1::SearchRequest, QueryError> {
    Ok(v1::SearchRequest {
        near_vector: Some(near_vector_message(params)?),
        ..build_common(collection, options)
    })
}

pub fn build_near_text(
    collection: &str,
    params: NearTextParams,
    options: &QueryOptions,
) -> Result<v1::SearchRequest, QueryError> {
    Ok(v1::SearchRequest {
        near_text: Some(near_text_message(params)?),
        ..build_common(collection, options)
    })
}

pub fn build_near_object(
    collection: &str,
    params: NearObjectParams,
    options: &QueryOptions,
) -> Result<v1::SearchRequest, QueryError> {
    Ok(v1::SearchRequest {
        near_object: Some(near_object_message(params)?),
        ..build_common(collection, options)
    })
}

pub fn build_near_media(
    collection: &str,
    params: NearMediaParams,
    options: &QueryOptions,
) -> Result<v1::SearchRequest, QueryError> {
    let kind = params.kind;
    let media = near_media_message(params)?;
    let mut request = build_common(collection, options);

    let slot = match kind {
        MediaKind::Image => &mut request.near_image,
        MediaKind::Video => &mut request.near_video,
        MediaKind::Audio => &mut request.near_audio,
        MediaKind::Depth => &mut request.near_depth,
        MediaKind::Thermal => &mut request.near_thermal,
        MediaKind::Imu => &mut request.near_imu,
    };
    *slot = Some(media);

    Ok(request)
}

pub fn build_bm25(
    collection: &str,
    params: Bm25Params,
    options: &QueryOptions,
) -> Result<v1::SearchRequest, QueryError> {
    Ok(v1::SearchRequest {
        bm25_search: Some(v1::Bm25 {
            query: params.query,
            properties: params.properties,
            search_operator: params.operator.map(to_wire_operator),
        }),
        ..build_common(collection, options)
    })
}

pub fn build_hybrid(
    collection: &str,
    params: HybridParams,
    options: &QueryOptions,
) -> Result<v1::SearchRequest, QueryError> {
    Ok(v1::SearchRequest {
        hybrid_search: Some(hybrid_message(params)?),
        ..build_common(collection, options)
    })
}

pub(crate) fn near_vector_message(params: NearVectorParams) -> Result<v1::NearVector, QueryError> {
    if params.vectors.is_empty() {
        return Err(QueryError::validation(
            "near-vector search needs at least one vector",
        ));
    }
    validate_vectors(&params.vectors)?;
    validate_target(params.target.as_ref())?;

    let resolved = resolve(params.target, params.vectors);
    let mut message = v1::NearVector {
        certainty: params.certainty,
        distance: params.distance,
        targets: wire_targets(resolved.targets.as_ref()),
        ..Default::default()
    };
    attach_vectors(&mut message, resolved);

    Ok(message)
}

pub(crate) fn near_text_message(params: NearTextParams) -> Result<v1::NearTextSearch, QueryError> {
    if params.queries.is_empty() {
        return Err(QueryError::validation(
            "near-text search needs at least one query",
        ));
    }
    validate_target(params.target.as_ref())?;

    Ok(v1::NearTextSearch {
        query: params.queries,
        certainty: params.certainty,
        distance: params.distance,
        move_to: params.move_to.map(to_wire_move).transpose()?,
        move_away: params.move_away.map(to_wire_move).transpose()?,
        targets: wire_targets(params.target.as_ref()),
    })
}

pub(crate) fn near_object_message(params: NearObjectParams) -> Result<v1::NearObject, QueryError> {
    validate_target(params.target.as_ref())?;

    Ok(v1::NearObject {
        id: params.id.to_string(),
        certainty: params.certainty,
        distance: params.distance,
        targets: wire_targets(params.target.as_ref()),
    })
}

pub(crate) fn near_media_message(params: NearMediaParams) -> Result<v1::NearMedia, QueryError> {
    if params.media.is_empty() {
        return Err(QueryError::validation(format!(
            "near-{} search needs a non-empty payload",
            params.kind
        )));
    }
    validate_target(params.target.as_ref())?;

    Ok(v1::NearMedia {
        media: BASE64.encode(&params.media),
        certainty: params.certainty,
        distance: params.distance,
        targets: wire_targets(params.target.as_ref()),
    })
}

/// Builds the hybrid message. Targets always sit on the hybrid message, never
/// inside a nested near-vector / near-text search.
///
/// A vector input that is present but empty is an error, not a keyword-only
/// search.
pub(crate) fn hybrid_message(params: HybridParams) -> Result<v1::Hybrid, QueryError> {
    let query = params.query.filter(|q| !q.is_empty());
    let vector = params.vector;

    if query.is_none() && vector.is_none() {
        return Err(QueryError::validation(
            "hybrid search needs a query, a vector input, or both",
        ));
    }
    validate_target(params.target.as_ref())?;

    let alpha = match query {
        Some(_) => params.alpha.unwrap_or(DEFAULT_HYBRID_ALPHA),
        None => PURE_VECTOR_ALPHA,
    };

    let mut hybrid = v1::Hybrid {
        query: query.unwrap_or_default(),
        properties: params.properties,
        alpha,
        fusion_type: params.fusion.map_or(v1::FusionType::Unspecified, to_wire_fusion) as i32,
        bm25_search_operator: params.bm25_operator.map(to_wire_operator),
        ..Default::default()
    };

    match vector {
        None => {
            hybrid.targets = wire_targets(params.target.as_ref());
        }
        Some(HybridVectorInput::Vectors(vectors)) => {
            if vectors.is_empty() {
                return Err(QueryError::validation(
                    "hybrid vector input needs at least one vector",
                ));
            }
            validate_vectors(&vectors)?;
            let resolved = resolve(params.target, vectors);
            hybrid.targets = wire_targets(resolved.targets.as_ref());
            match resolved.per_target {
                Some(groups) => {
                    hybrid.near_vector = Some(v1::NearVector {
                        vector_for_targets: to_wire_vector_for_targets(&groups),
                        ..Default::default()
                    });
                }
                None => hybrid.vectors = to_wire_vectors(&resolved.flat.unwrap_or_default()),
            }
        }
        Some(HybridVectorInput::NearVector(mut sub)) => {
            sub.target = merge_target(params.target, sub.target)?;
            let mut near_vector = near_vector_message(sub)?;
            hybrid.targets = near_vector.targets.take();
            hybrid.near_vector = Some(near_vector);
        }
        Some(HybridVectorInput::NearText(mut sub)) => {
            sub.target = merge_target(params.target, sub.target)?;
            let mut near_text = near_text_message(sub)?;
            hybrid.targets = near_text.targets.take();
            hybrid.near_text = Some(near_text);
        }
    }

    Ok(hybrid)
}

/// Only one of the hybrid target and the nested search's target may be set.
fn merge_target(
    hybrid: Option<TargetVectorSpec>,
    nested: Option<TargetVectorSpec>,
) -> Result<Option<TargetVectorSpec>, QueryError> {
    match (hybrid, nested) {
        (Some(_), Some(_)) => Err(QueryError::validation(
            "target vectors set on both the hybrid search and its nested vector search",
        )),
        (hybrid, nested) => Ok(nested.or(hybrid)),
    }
}

/// Multi-vector rows must share one dimension that fits the `u16` prefix.
fn validate_vectors(vectors: &[NamedVector]) -> Result<(), QueryError> {
    for vector in vectors {
        let VectorData::Multi(rows) = &vector.data else {
            continue;
        };
        let dim = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|row| row.len() != dim) {
            return Err(QueryError::validation(format!(
                "multi-vector '{}' has rows of different lengths",
                vector.name
            )));
        }
        if u16::try_from(dim).is_err() {
            return Err(QueryError::validation(format!(
                "multi-vector '{}' has dimension {dim}, maximum is {}",
                vector.name,
                u16::MAX
            )));
        }
    }
    Ok(())
}

pub(crate) fn validate_target(target: Option<&TargetVectorSpec>) -> Result<(), QueryError> {
    target.map_or(Ok(()), TargetVectorSpec::validate)
}

/// Converts a resolved target spec, leaving it off when it only names the
/// unnamed vector.
pub(crate) fn wire_targets(spec: Option<&TargetVectorSpec>) -> Option<v1::Targets> {
    spec.filter(|s| !s.targets.iter().all(String::is_empty) || s.has_weights())
        .map(to_wire_targets)
}

fn attach_vectors(message: &mut v1::NearVector, resolved: ResolvedVectorEncoding) {
    if let Some(groups) = resolved.per_target {
        message.vector_for_targets = to_wire_vector_for_targets(&groups);
    } else if let Some(flat) = resolved.flat {
        message.vectors = to_wire_vectors(&flat);
    }
}

fn to_wire_move(steer: Move) -> Result<v1::Move, QueryError> {
    if steer.concepts.is_empty() && steer.objects.is_empty() {
        return Err(QueryError::validation(
            "move needs at least one concept or object",
        ));
    }

    Ok(v1::Move {
        force: steer.force,
        concepts: steer.concepts,
        uuids: steer.objects.iter().map(ToString::to_string).collect(),
    })
}

fn to_wire_operator(operator: Bm25Operator) -> v1::SearchOperatorOptions {
    match operator {
        Bm25Operator::And => v1::SearchOperatorOptions {
            operator: v1::SearchOperator::And as i32,
            minimum_or_tokens_match: None,
        },
        Bm25Operator::Or { minimum_match } => v1::SearchOperatorOptions {
            operator: v1::SearchOperator::Or as i32,
            minimum_or_tokens_match: Some(minimum_match.unwrap_or(DEFAULT_OR_MINIMUM_MATCH)),
        },
    }
}

fn to_wire_fusion(fusion: FusionType) -> v1::FusionType {
    match fusion {
        FusionType::Ranked => v1::FusionType::Ranked,
        FusionType::RelativeScore => v1::FusionType::RelativeScore,
    }
}

fn to_wire_group_by(group_by: &GroupBy) -> v1::GroupBy {
    v1::GroupBy {
        path: vec![decapitalize(&group_by.property)],
        number_of_groups: i32::try_from(group_by.number_of_groups).unwrap_or(i32::MAX),
        objects_per_group: i32::try_from(group_by.objects_per_group).unwrap_or(i32::MAX),
    }
}

pub(crate) fn to_wire_metadata(metadata: &MetadataQuery) -> v1::MetadataRequest {
    v1::MetadataRequest {
        uuid: true,
        vector: metadata.vector && metadata.vectors.is_empty(),
        creation_time_unix: metadata.creation_time,
        last_update_time_unix: metadata.last_update_time,
        distance: metadata.distance,
        certainty: metadata.certainty,
        score: metadata.score,
        explain_score: metadata.explain_score,
        is_consistent: metadata.is_consistent,
        vectors: metadata.vectors.clone(),
    }
}

fn to_wire_properties(
    properties: &PropertyProjection,
    references: &[ReferenceQuery],
) -> v1::PropertiesRequest {
    let (non_ref_properties, return_all_nonref_properties) = match properties {
        PropertyProjection::All => (Vec::new(), true),
        PropertyProjection::Only(names) => (names.clone(), false),
    };

    v1::PropertiesRequest {
        non_ref_properties,
        ref_properties: references.iter().map(to_wire_reference).collect(),
        return_all_nonref_properties,
    }
}

fn to_wire_reference(reference: &ReferenceQuery) -> v1::RefPropertiesRequest {
    v1::RefPropertiesRequest {
        reference_property: reference.link_on.clone(),
        properties: Some(to_wire_properties(
            &reference.properties,
            &reference.references,
        )),
        metadata: Some(to_wire_metadata(&reference.metadata)),
        target_collection: reference.target_collection.clone().unwrap_or_default(),
    }
}

/// Server-side property names start lowercase.
pub(crate) fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
