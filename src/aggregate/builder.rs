use tracing::debug;

use crate::proto::v1;
use crate::proto::v1::aggregate_request::{self, Search};
use crate::query::builder::{
    hybrid_message, near_media_message, near_object_message, near_text_message,
    near_vector_message,
};
use crate::query::{MediaKind, QueryError};

use super::params::{AggregateParams, AggregateSearch};

/// Builds an aggregate request. Search payloads go through the same message
/// builders, and so the same target resolution, as plain searches.
pub fn build_aggregate(
    collection: &str,
    params: AggregateParams,
) -> Result<v1::AggregateRequest, QueryError> {
    if params.object_limit.is_some() && params.search.is_none() {
        return Err(QueryError::validation(
            "object limit only applies to aggregations over a search",
        ));
    }

    let aggregations = params
        .metrics
        .iter()
        .map(|m| m.to_wire())
        .collect::<Result<Vec<_>, _>>()?;

    let search = params.search.map(to_wire_search).transpose()?;

    debug!(
        collection,
        metrics = aggregations.len(),
        grouped = params.group_by.is_some(),
        "Built aggregate request"
    );

    Ok(v1::AggregateRequest {
        collection: collection.to_string(),
        tenant: params.tenant.unwrap_or_default(),
        objects_count: params.total_count,
        aggregations,
        object_limit: params.object_limit,
        limit: params.group_by.as_ref().and_then(|g| g.limit),
        group_by: params.group_by.map(|g| aggregate_request::GroupBy {
            collection: collection.to_string(),
            property: g.property,
        }),
        filters: params.filter.as_ref().map(|f| f.to_wire()),
        search,
    })
}

fn to_wire_search(search: AggregateSearch) -> Result<Search, QueryError> {
    Ok(match search {
        AggregateSearch::NearVector(p) => Search::NearVector(near_vector_message(p)?),
        AggregateSearch::NearText(p) => Search::NearText(near_text_message(p)?),
        AggregateSearch::NearObject(p) => Search::NearObject(near_object_message(p)?),
        AggregateSearch::Hybrid(p) => Search::Hybrid(hybrid_message(p)?),
        AggregateSearch::NearMedia(p) => {
            let kind = p.kind;
            let media = near_media_message(p)?;
            match kind {
                MediaKind::Image => Search::NearImage(media),
                MediaKind::Video => Search::NearVideo(media),
                MediaKind::Audio => Search::NearAudio(media),
                MediaKind::Depth => Search::NearDepth(media),
                MediaKind::Thermal => Search::NearThermal(media),
                MediaKind::Imu => Search::NearImu(media),
            }
        }
    })
}
