use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::vectors::VectorData;

/// Decoded property bag, ordered by property name.
pub type Properties = BTreeMap<String, PropertyValue>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinate {
    pub latitude: f32,
    pub longitude: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    pub country_code: u64,
    pub default_country: String,
    pub input: String,
    pub international_formatted: String,
    pub national: u64,
    pub national_formatted: String,
    pub valid: bool,
}

/// A non-null property value. Null and unrecognised values are omitted from
/// [`Properties`] rather than represented.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Int(i64),
    Object(Properties),
    List(ListValue),
    Date(DateTime<FixedOffset>),
    Uuid(Uuid),
    Geo(GeoCoordinate),
    /// Base64 payload as sent by the server.
    Blob(String),
    Phone(PhoneNumber),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numbers and ints both widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Properties> {
        match self {
            PropertyValue::Object(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListValue {
    Bool(Vec<bool>),
    Object(Vec<Properties>),
    Date(Vec<DateTime<FixedOffset>>),
    Uuid(Vec<Uuid>),
    Text(Vec<String>),
    Int(Vec<i64>),
    Number(Vec<f64>),
}

/// Only fields the server flagged as present are set.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ObjectMetadata {
    pub creation_time: Option<DateTime<Utc>>,
    pub last_update_time: Option<DateTime<Utc>>,
    pub distance: Option<f32>,
    pub certainty: Option<f32>,
    pub score: Option<f32>,
    pub explain_score: Option<String>,
    pub is_consistent: Option<bool>,
    pub rerank_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedObject {
    pub id: Uuid,
    pub collection: String,
    pub properties: Properties,
    pub vectors: BTreeMap<String, VectorData>,
    pub metadata: ObjectMetadata,
    /// Referenced objects by reference property. Empty when not requested;
    /// check `references_requested` to tell that apart from "no references".
    pub references: BTreeMap<String, Vec<DecodedObject>>,
    pub references_requested: bool,
    /// Output of the single-prompt generative task, if any.
    pub generated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QueryResult {
    pub objects: Vec<DecodedObject>,
    /// Output of the grouped generative task, if any.
    pub generated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedObject {
    pub object: DecodedObject,
    pub belongs_to_group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub name: String,
    pub min_distance: f32,
    pub max_distance: f32,
    pub number_of_objects: i64,
    pub objects: Vec<DecodedObject>,
}

/// Group-by results. `objects` is the server-ordered union of every group;
/// `groups` indexes the same objects by group name.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupByResult {
    pub objects: Vec<GroupedObject>,
    pub groups: BTreeMap<String, Group>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Objects(QueryResult),
    Grouped(GroupByResult),
}

impl SearchResponse {
    pub fn into_objects(self) -> Option<QueryResult> {
        match self {
            SearchResponse::Objects(result) => Some(result),
            SearchResponse::Grouped(_) => None,
        }
    }

    pub fn into_grouped(self) -> Option<GroupByResult> {
        match self {
            SearchResponse::Grouped(result) => Some(result),
            SearchResponse::Objects(_) => None,
        }
    }
}
