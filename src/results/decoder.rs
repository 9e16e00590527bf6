use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::constants::{DEFAULT_VECTOR_NAME, PACKED_64_BYTES};
use crate::proto::v1;
use crate::proto::v1::{list_value, value};
use crate::vectors::{VectorData, unpack_vector};

use super::error::DecodeError;
use super::model::{
    DecodedObject, GeoCoordinate, Group, GroupByResult, GroupedObject, ListValue, ObjectMetadata,
    PhoneNumber, Properties, PropertyValue, QueryResult, SearchResponse,
};

/// Decodes a reply, grouped or flat depending on whether the request asked
/// for group-by.
pub fn decode_reply(
    collection: &str,
    reply: v1::SearchReply,
    grouped: bool,
) -> Result<SearchResponse, DecodeError> {
    if grouped {
        decode_group_by_reply(collection, reply).map(SearchResponse::Grouped)
    } else {
        decode_search_reply(collection, reply).map(SearchResponse::Objects)
    }
}

pub fn decode_search_reply(
    collection: &str,
    reply: v1::SearchReply,
) -> Result<QueryResult, DecodeError> {
    let objects = reply
        .results
        .into_iter()
        .map(|result| decode_result(collection, result))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(objects = objects.len(), "Decoded search reply");

    Ok(QueryResult {
        objects,
        generated: reply.generative_grouped_result,
    })
}

pub fn decode_group_by_reply(
    collection: &str,
    reply: v1::SearchReply,
) -> Result<GroupByResult, DecodeError> {
    let mut result = GroupByResult::default();

    for group in reply.group_by_results {
        let objects = group
            .objects
            .into_iter()
            .map(|r| decode_result(collection, r))
            .collect::<Result<Vec<_>, _>>()?;

        result
            .objects
            .extend(objects.iter().cloned().map(|object| GroupedObject {
                object,
                belongs_to_group: group.name.clone(),
            }));

        result
            .groups
            .entry(group.name.clone())
            .or_insert_with(|| Group {
                name: group.name,
                min_distance: group.min_distance,
                max_distance: group.max_distance,
                number_of_objects: group.number_of_objects,
                objects: Vec::new(),
            })
            .objects
            .extend(objects);
    }

    debug!(
        groups = result.groups.len(),
        objects = result.objects.len(),
        "Decoded group-by reply"
    );

    Ok(result)
}

fn decode_result(collection: &str, result: v1::SearchResult) -> Result<DecodedObject, DecodeError> {
    decode_object(
        collection,
        result.metadata.unwrap_or_default(),
        result.properties.unwrap_or_default(),
    )
}

fn decode_object(
    collection: &str,
    metadata: v1::MetadataResult,
    properties: v1::PropertiesResult,
) -> Result<DecodedObject, DecodeError> {
    Ok(DecodedObject {
        id: decode_id(&metadata)?,
        collection: collection.to_string(),
        properties: properties
            .non_ref_props
            .map(decode_properties)
            .transpose()?
            .unwrap_or_default(),
        vectors: decode_vectors(&metadata)?,
        references: decode_references(properties.ref_props)?,
        references_requested: properties.ref_props_requested,
        generated: metadata
            .generative_present
            .then(|| metadata.generative.clone()),
        metadata: decode_metadata(metadata)?,
    })
}

fn decode_references(
    refs: Vec<v1::RefPropertiesResult>,
) -> Result<BTreeMap<String, Vec<DecodedObject>>, DecodeError> {
    let mut out: BTreeMap<String, Vec<DecodedObject>> = BTreeMap::new();

    for reference in refs {
        let objects = out.entry(reference.prop_name).or_default();
        for mut target in reference.properties {
            let metadata = target.metadata.take().unwrap_or_default();
            let collection = std::mem::take(&mut target.target_collection);
            objects.push(decode_object(&collection, metadata, target)?);
        }
    }

    Ok(out)
}

fn decode_id(metadata: &v1::MetadataResult) -> Result<Uuid, DecodeError> {
    if !metadata.id_as_bytes.is_empty() {
        return Uuid::from_slice(&metadata.id_as_bytes).map_err(|e| DecodeError::InvalidUuid {
            value: format!("{:02x?}", metadata.id_as_bytes),
            source: e,
        });
    }

    if metadata.id.is_empty() {
        return Ok(Uuid::nil());
    }

    parse_uuid(&metadata.id)
}

fn decode_metadata(metadata: v1::MetadataResult) -> Result<ObjectMetadata, DecodeError> {
    Ok(ObjectMetadata {
        creation_time: metadata
            .creation_time_unix_present
            .then(|| from_millis(metadata.creation_time_unix))
            .transpose()?,
        last_update_time: metadata
            .last_update_time_unix_present
            .then(|| from_millis(metadata.last_update_time_unix))
            .transpose()?,
        distance: metadata.distance_present.then_some(metadata.distance),
        certainty: metadata.certainty_present.then_some(metadata.certainty),
        score: metadata.score_present.then_some(metadata.score),
        explain_score: metadata
            .explain_score_present
            .then_some(metadata.explain_score),
        is_consistent: if metadata.is_consistent_present {
            metadata.is_consistent
        } else {
            None
        },
        rerank_score: metadata.rerank_score_present.then_some(metadata.rerank_score),
    })
}

fn decode_vectors(
    metadata: &v1::MetadataResult,
) -> Result<BTreeMap<String, VectorData>, DecodeError> {
    let mut out = BTreeMap::new();

    for vector in &metadata.vectors {
        let kind = v1::VectorType::try_from(vector.r#type).unwrap_or(v1::VectorType::Unspecified);
        out.insert(
            vector.name.clone(),
            unpack_vector(&vector.name, &vector.vector_bytes, kind)?,
        );
    }

    if !metadata.vector_bytes.is_empty() && !out.contains_key(DEFAULT_VECTOR_NAME) {
        out.insert(
            DEFAULT_VECTOR_NAME.to_string(),
            unpack_vector(
                DEFAULT_VECTOR_NAME,
                &metadata.vector_bytes,
                v1::VectorType::SingleFp32,
            )?,
        );
    }

    Ok(out)
}

/// Decodes a property bag, dropping null and unrecognised values.
pub fn decode_properties(properties: v1::Properties) -> Result<Properties, DecodeError> {
    let mut out = BTreeMap::new();
    for (name, value) in properties.fields {
        if let Some(decoded) = decode_value(value)? {
            out.insert(name, decoded);
        }
    }
    Ok(out)
}

fn decode_value(value: v1::Value) -> Result<Option<PropertyValue>, DecodeError> {
    let Some(kind) = value.kind else {
        return Ok(None);
    };

    let decoded = match kind {
        value::Kind::NullValue(_) => return Ok(None),
        value::Kind::NumberValue(n) => PropertyValue::Number(n),
        value::Kind::StringValue(s) | value::Kind::TextValue(s) => PropertyValue::Text(s),
        value::Kind::BoolValue(b) => PropertyValue::Bool(b),
        value::Kind::IntValue(i) => PropertyValue::Int(i),
        value::Kind::ObjectValue(nested) => PropertyValue::Object(decode_properties(nested)?),
        value::Kind::ListValue(list) => match decode_list(list)? {
            Some(list) => PropertyValue::List(list),
            None => return Ok(None),
        },
        value::Kind::DateValue(s) => PropertyValue::Date(parse_date(&s)?),
        value::Kind::UuidValue(s) => PropertyValue::Uuid(parse_uuid(&s)?),
        value::Kind::GeoValue(geo) => PropertyValue::Geo(GeoCoordinate {
            latitude: geo.latitude,
            longitude: geo.longitude,
        }),
        value::Kind::BlobValue(b) => PropertyValue::Blob(b),
        value::Kind::PhoneValue(phone) => PropertyValue::Phone(PhoneNumber {
            country_code: phone.country_code,
            default_country: phone.default_country,
            input: phone.input,
            international_formatted: phone.international_formatted,
            national: phone.national,
            national_formatted: phone.national_formatted,
            valid: phone.valid,
        }),
    };

    Ok(Some(decoded))
}

fn decode_list(list: v1::ListValue) -> Result<Option<ListValue>, DecodeError> {
    let Some(kind) = list.kind else {
        return Ok(None);
    };

    let decoded = match kind {
        list_value::Kind::BoolValues(v) => ListValue::Bool(v.values),
        list_value::Kind::TextValues(v) => ListValue::Text(v.values),
        list_value::Kind::ObjectValues(v) => ListValue::Object(
            v.values
                .into_iter()
                .map(decode_properties)
                .collect::<Result<_, _>>()?,
        ),
        list_value::Kind::DateValues(v) => ListValue::Date(
            v.values
                .iter()
                .map(|s| parse_date(s))
                .collect::<Result<_, _>>()?,
        ),
        list_value::Kind::UuidValues(v) => ListValue::Uuid(
            v.values
                .iter()
                .map(|s| parse_uuid(s))
                .collect::<Result<_, _>>()?,
        ),
        list_value::Kind::IntValues(v) => ListValue::Int(
            unpack_64("int", &v.values)?
                .map(i64::from_le_bytes)
                .collect(),
        ),
        list_value::Kind::NumberValues(v) => ListValue::Number(
            unpack_64("number", &v.values)?
                .map(f64::from_le_bytes)
                .collect(),
        ),
    };

    Ok(Some(decoded))
}

fn unpack_64<'a>(
    kind: &'static str,
    bytes: &'a [u8],
) -> Result<impl Iterator<Item = [u8; PACKED_64_BYTES]> + 'a, DecodeError> {
    if !bytes.len().is_multiple_of(PACKED_64_BYTES) {
        return Err(DecodeError::MalformedPackedValues {
            kind,
            len: bytes.len(),
        });
    }

    Ok(bytes.chunks_exact(PACKED_64_BYTES).map(|chunk| {
        let mut buf = [0u8; PACKED_64_BYTES];
        buf.copy_from_slice(chunk);
        buf
    }))
}

fn parse_uuid(value: &str) -> Result<Uuid, DecodeError> {
    Uuid::parse_str(value).map_err(|e| DecodeError::InvalidUuid {
        value: value.to_string(),
        source: e,
    })
}

fn parse_date(value: &str) -> Result<DateTime<FixedOffset>, DecodeError> {
    DateTime::parse_from_rfc3339(value).map_err(|e| DecodeError::InvalidDate {
        value: value.to_string(),
        source: e,
    })
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>, DecodeError> {
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or(DecodeError::InvalidTimestamp { millis })
}
