// Message definitions for the subset of the `weaviate.v1` RPC surface used by
// this crate. Field tags follow the server's published protocol files.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// base
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ConsistencyLevel {
    Unspecified = 0,
    One = 1,
    Quorum = 2,
    All = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FilterOperator {
    Unspecified = 0,
    Equal = 1,
    NotEqual = 2,
    GreaterThan = 3,
    GreaterThanEqual = 4,
    LessThan = 5,
    LessThanEqual = 6,
    And = 7,
    Or = 8,
    WithinGeoRange = 9,
    Like = 10,
    IsNull = 11,
    ContainsAny = 12,
    ContainsAll = 13,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextArray {
    #[prost(string, repeated, tag = "1")]
    pub values: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntArray {
    #[prost(int64, repeated, tag = "1")]
    pub values: Vec<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NumberArray {
    #[prost(double, repeated, tag = "1")]
    pub values: Vec<f64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BooleanArray {
    #[prost(bool, repeated, tag = "1")]
    pub values: Vec<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeoCoordinatesFilter {
    #[prost(float, tag = "1")]
    pub latitude: f32,
    #[prost(float, tag = "2")]
    pub longitude: f32,
    #[prost(float, tag = "3")]
    pub distance: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Filters {
    #[prost(enumeration = "FilterOperator", tag = "1")]
    pub operator: i32,
    #[prost(string, repeated, tag = "2")]
    pub on: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub filters: Vec<Filters>,
    #[prost(oneof = "filters::TestValue", tags = "4, 5, 6, 7, 9, 10, 11, 12, 13")]
    pub test_value: Option<filters::TestValue>,
}

pub mod filters {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum TestValue {
        #[prost(string, tag = "4")]
        ValueText(String),
        #[prost(int64, tag = "5")]
        ValueInt(i64),
        #[prost(bool, tag = "6")]
        ValueBoolean(bool),
        #[prost(double, tag = "7")]
        ValueNumber(f64),
        #[prost(message, tag = "9")]
        ValueTextArray(super::TextArray),
        #[prost(message, tag = "10")]
        ValueIntArray(super::IntArray),
        #[prost(message, tag = "11")]
        ValueBooleanArray(super::BooleanArray),
        #[prost(message, tag = "12")]
        ValueNumberArray(super::NumberArray),
        #[prost(message, tag = "13")]
        ValueGeo(super::GeoCoordinatesFilter),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VectorType {
    Unspecified = 0,
    SingleFp32 = 1,
    MultiFp32 = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vectors {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bytes = "vec", tag = "3")]
    pub vector_bytes: Vec<u8>,
    #[prost(enumeration = "VectorType", tag = "4")]
    pub r#type: i32,
}

// ---------------------------------------------------------------------------
// base_search
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CombinationMethod {
    Unspecified = 0,
    TypeSum = 1,
    TypeMin = 2,
    TypeAverage = 3,
    TypeRelativeScore = 4,
    TypeManual = 5,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WeightsForTarget {
    #[prost(string, tag = "1")]
    pub target: String,
    #[prost(float, tag = "2")]
    pub weight: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Targets {
    #[prost(string, repeated, tag = "1")]
    pub target_vectors: Vec<String>,
    #[prost(enumeration = "CombinationMethod", tag = "2")]
    pub combination: i32,
    #[prost(message, repeated, tag = "4")]
    pub weights_for_targets: Vec<WeightsForTarget>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VectorForTarget {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "3")]
    pub vectors: Vec<Vectors>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SearchOperator {
    Unspecified = 0,
    Or = 1,
    And = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchOperatorOptions {
    #[prost(enumeration = "SearchOperator", tag = "1")]
    pub operator: i32,
    #[prost(int32, optional, tag = "2")]
    pub minimum_or_tokens_match: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FusionType {
    Unspecified = 0,
    Ranked = 1,
    RelativeScore = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Hybrid {
    #[prost(string, tag = "1")]
    pub query: String,
    #[prost(string, repeated, tag = "2")]
    pub properties: Vec<String>,
    #[prost(float, tag = "4")]
    pub alpha: f32,
    #[prost(enumeration = "FusionType", tag = "5")]
    pub fusion_type: i32,
    #[prost(message, optional, tag = "8")]
    pub near_text: Option<NearTextSearch>,
    #[prost(message, optional, tag = "9")]
    pub near_vector: Option<NearVector>,
    #[prost(message, optional, tag = "10")]
    pub targets: Option<Targets>,
    #[prost(message, optional, tag = "11")]
    pub bm25_search_operator: Option<SearchOperatorOptions>,
    #[prost(message, repeated, tag = "20")]
    pub vectors: Vec<Vectors>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Move {
    #[prost(float, tag = "1")]
    pub force: f32,
    #[prost(string, repeated, tag = "2")]
    pub concepts: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub uuids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearTextSearch {
    #[prost(string, repeated, tag = "1")]
    pub query: Vec<String>,
    #[prost(double, optional, tag = "2")]
    pub certainty: Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: Option<f64>,
    #[prost(message, optional, tag = "4")]
    pub move_to: Option<Move>,
    #[prost(message, optional, tag = "5")]
    pub move_away: Option<Move>,
    #[prost(message, optional, tag = "7")]
    pub targets: Option<Targets>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearVector {
    #[prost(double, optional, tag = "2")]
    pub certainty: Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: Option<f64>,
    #[prost(message, optional, tag = "6")]
    pub targets: Option<Targets>,
    #[prost(message, repeated, tag = "8")]
    pub vector_for_targets: Vec<VectorForTarget>,
    #[prost(message, repeated, tag = "9")]
    pub vectors: Vec<Vectors>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearObject {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(double, optional, tag = "2")]
    pub certainty: Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: Option<f64>,
    #[prost(message, optional, tag = "5")]
    pub targets: Option<Targets>,
}

/// Shared shape of every near-media message; only the payload field name
/// differs on the server side, and that is carried by the enclosing tag.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearMedia {
    #[prost(string, tag = "1")]
    pub media: String,
    #[prost(double, optional, tag = "2")]
    pub certainty: Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: Option<f64>,
    #[prost(message, optional, tag = "5")]
    pub targets: Option<Targets>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Bm25 {
    #[prost(string, tag = "1")]
    pub query: String,
    #[prost(string, repeated, tag = "2")]
    pub properties: Vec<String>,
    #[prost(message, optional, tag = "3")]
    pub search_operator: Option<SearchOperatorOptions>,
}

// ---------------------------------------------------------------------------
// search_get
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    #[prost(string, tag = "1")]
    pub collection: String,
    #[prost(string, tag = "10")]
    pub tenant: String,
    #[prost(enumeration = "ConsistencyLevel", optional, tag = "11")]
    pub consistency_level: Option<i32>,
    #[prost(message, optional, tag = "20")]
    pub properties: Option<PropertiesRequest>,
    #[prost(message, optional, tag = "21")]
    pub metadata: Option<MetadataRequest>,
    #[prost(message, optional, tag = "22")]
    pub group_by: Option<GroupBy>,
    #[prost(uint32, tag = "30")]
    pub limit: u32,
    #[prost(uint32, tag = "31")]
    pub offset: u32,
    #[prost(uint32, tag = "32")]
    pub autocut: u32,
    #[prost(string, tag = "33")]
    pub after: String,
    #[prost(message, repeated, tag = "34")]
    pub sort_by: Vec<SortBy>,
    #[prost(message, optional, tag = "40")]
    pub filters: Option<Filters>,
    #[prost(message, optional, tag = "41")]
    pub hybrid_search: Option<Hybrid>,
    #[prost(message, optional, tag = "42")]
    pub bm25_search: Option<Bm25>,
    #[prost(message, optional, tag = "43")]
    pub near_vector: Option<NearVector>,
    #[prost(message, optional, tag = "44")]
    pub near_object: Option<NearObject>,
    #[prost(message, optional, tag = "45")]
    pub near_text: Option<NearTextSearch>,
    #[prost(message, optional, tag = "46")]
    pub near_image: Option<NearMedia>,
    #[prost(message, optional, tag = "47")]
    pub near_audio: Option<NearMedia>,
    #[prost(message, optional, tag = "48")]
    pub near_video: Option<NearMedia>,
    #[prost(message, optional, tag = "49")]
    pub near_depth: Option<NearMedia>,
    #[prost(message, optional, tag = "50")]
    pub near_thermal: Option<NearMedia>,
    #[prost(message, optional, tag = "51")]
    pub near_imu: Option<NearMedia>,
    #[prost(message, optional, tag = "60")]
    pub generative: Option<GenerativeSearch>,
    #[prost(message, optional, tag = "61")]
    pub rerank: Option<Rerank>,
    #[prost(bool, tag = "100")]
    pub uses_123_api: bool,
    #[prost(bool, tag = "101")]
    pub uses_125_api: bool,
    #[prost(bool, tag = "102")]
    pub uses_127_api: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GroupBy {
    #[prost(string, repeated, tag = "1")]
    pub path: Vec<String>,
    #[prost(int32, tag = "2")]
    pub number_of_groups: i32,
    #[prost(int32, tag = "3")]
    pub objects_per_group: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SortBy {
    #[prost(bool, tag = "1")]
    pub ascending: bool,
    #[prost(string, repeated, tag = "2")]
    pub path: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerativeSearch {
    #[prost(string, tag = "1")]
    pub single_response_prompt: String,
    #[prost(string, tag = "2")]
    pub grouped_response_task: String,
    #[prost(string, repeated, tag = "3")]
    pub grouped_properties: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rerank {
    #[prost(string, tag = "1")]
    pub property: String,
    #[prost(string, optional, tag = "2")]
    pub query: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetadataRequest {
    #[prost(bool, tag = "1")]
    pub uuid: bool,
    #[prost(bool, tag = "2")]
    pub vector: bool,
    #[prost(bool, tag = "3")]
    pub creation_time_unix: bool,
    #[prost(bool, tag = "4")]
    pub last_update_time_unix: bool,
    #[prost(bool, tag = "5")]
    pub distance: bool,
    #[prost(bool, tag = "6")]
    pub certainty: bool,
    #[prost(bool, tag = "7")]
    pub score: bool,
    #[prost(bool, tag = "8")]
    pub explain_score: bool,
    #[prost(bool, tag = "9")]
    pub is_consistent: bool,
    #[prost(string, repeated, tag = "10")]
    pub vectors: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PropertiesRequest {
    #[prost(string, repeated, tag = "1")]
    pub non_ref_properties: Vec<String>,
    #[prost(message, repeated, tag = "2")]
    pub ref_properties: Vec<RefPropertiesRequest>,
    #[prost(bool, tag = "11")]
    pub return_all_nonref_properties: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RefPropertiesRequest {
    #[prost(string, tag = "1")]
    pub reference_property: String,
    #[prost(message, optional, tag = "2")]
    pub properties: Option<PropertiesRequest>,
    #[prost(message, optional, tag = "3")]
    pub metadata: Option<MetadataRequest>,
    #[prost(string, tag = "4")]
    pub target_collection: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchReply {
    #[prost(float, tag = "1")]
    pub took: f32,
    #[prost(message, repeated, tag = "2")]
    pub results: Vec<SearchResult>,
    #[prost(string, optional, tag = "3")]
    pub generative_grouped_result: Option<String>,
    #[prost(message, repeated, tag = "4")]
    pub group_by_results: Vec<GroupByResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GroupByResult {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(float, tag = "2")]
    pub min_distance: f32,
    #[prost(float, tag = "3")]
    pub max_distance: f32,
    #[prost(int64, tag = "4")]
    pub number_of_objects: i64,
    #[prost(message, repeated, tag = "5")]
    pub objects: Vec<SearchResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResult {
    #[prost(message, optional, tag = "1")]
    pub properties: Option<PropertiesResult>,
    #[prost(message, optional, tag = "2")]
    pub metadata: Option<MetadataResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetadataResult {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(int64, tag = "3")]
    pub creation_time_unix: i64,
    #[prost(bool, tag = "4")]
    pub creation_time_unix_present: bool,
    #[prost(int64, tag = "5")]
    pub last_update_time_unix: i64,
    #[prost(bool, tag = "6")]
    pub last_update_time_unix_present: bool,
    #[prost(float, tag = "7")]
    pub distance: f32,
    #[prost(bool, tag = "8")]
    pub distance_present: bool,
    #[prost(float, tag = "9")]
    pub certainty: f32,
    #[prost(bool, tag = "10")]
    pub certainty_present: bool,
    #[prost(float, tag = "11")]
    pub score: f32,
    #[prost(bool, tag = "12")]
    pub score_present: bool,
    #[prost(string, tag = "13")]
    pub explain_score: String,
    #[prost(bool, tag = "14")]
    pub explain_score_present: bool,
    #[prost(bool, optional, tag = "15")]
    pub is_consistent: Option<bool>,
    #[prost(string, tag = "16")]
    pub generative: String,
    #[prost(bool, tag = "17")]
    pub generative_present: bool,
    #[prost(bool, tag = "18")]
    pub is_consistent_present: bool,
    #[prost(bytes = "vec", tag = "19")]
    pub vector_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "20")]
    pub id_as_bytes: Vec<u8>,
    #[prost(double, tag = "21")]
    pub rerank_score: f64,
    #[prost(bool, tag = "22")]
    pub rerank_score_present: bool,
    #[prost(message, repeated, tag = "23")]
    pub vectors: Vec<Vectors>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PropertiesResult {
    #[prost(message, repeated, tag = "2")]
    pub ref_props: Vec<RefPropertiesResult>,
    #[prost(string, tag = "3")]
    pub target_collection: String,
    #[prost(message, optional, tag = "4")]
    pub metadata: Option<MetadataResult>,
    #[prost(message, optional, tag = "11")]
    pub non_ref_props: Option<Properties>,
    #[prost(bool, tag = "12")]
    pub ref_props_requested: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RefPropertiesResult {
    #[prost(message, repeated, tag = "1")]
    pub properties: Vec<PropertiesResult>,
    #[prost(string, tag = "2")]
    pub prop_name: String,
}

// ---------------------------------------------------------------------------
// properties
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(map = "string, message", tag = "1")]
    pub fields: HashMap<String, Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum NullValue {
    NullValue = 0,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Value {
    #[prost(oneof = "value::Kind", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13")]
    pub kind: Option<value::Kind>,
}

pub mod value {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Kind {
        #[prost(double, tag = "1")]
        NumberValue(f64),
        #[prost(string, tag = "2")]
        StringValue(String),
        #[prost(bool, tag = "3")]
        BoolValue(bool),
        #[prost(message, tag = "4")]
        ObjectValue(super::Properties),
        #[prost(message, tag = "5")]
        ListValue(super::ListValue),
        #[prost(string, tag = "6")]
        DateValue(String),
        #[prost(string, tag = "7")]
        UuidValue(String),
        #[prost(int64, tag = "8")]
        IntValue(i64),
        #[prost(message, tag = "9")]
        GeoValue(super::GeoCoordinate),
        #[prost(string, tag = "10")]
        BlobValue(String),
        #[prost(message, tag = "11")]
        PhoneValue(super::PhoneNumber),
        #[prost(enumeration = "super::NullValue", tag = "12")]
        NullValue(i32),
        #[prost(string, tag = "13")]
        TextValue(String),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListValue {
    #[prost(oneof = "list_value::Kind", tags = "2, 3, 4, 5, 6, 7, 8")]
    pub kind: Option<list_value::Kind>,
}

pub mod list_value {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Kind {
        #[prost(message, tag = "2")]
        NumberValues(super::NumberValues),
        #[prost(message, tag = "3")]
        BoolValues(super::BoolValues),
        #[prost(message, tag = "4")]
        ObjectValues(super::ObjectValues),
        #[prost(message, tag = "5")]
        DateValues(super::DateValues),
        #[prost(message, tag = "6")]
        UuidValues(super::UuidValues),
        #[prost(message, tag = "7")]
        IntValues(super::IntValues),
        #[prost(message, tag = "8")]
        TextValues(super::TextValues),
    }
}

/// Little-endian packed `f64` values.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NumberValues {
    #[prost(bytes = "vec", tag = "1")]
    pub values: Vec<u8>,
}

/// Little-endian packed `i64` values.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntValues {
    #[prost(bytes = "vec", tag = "1")]
    pub values: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoolValues {
    #[prost(bool, repeated, tag = "1")]
    pub values: Vec<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectValues {
    #[prost(message, repeated, tag = "1")]
    pub values: Vec<Properties>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DateValues {
    #[prost(string, repeated, tag = "1")]
    pub values: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UuidValues {
    #[prost(string, repeated, tag = "1")]
    pub values: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextValues {
    #[prost(string, repeated, tag = "1")]
    pub values: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeoCoordinate {
    #[prost(float, tag = "1")]
    pub longitude: f32,
    #[prost(float, tag = "2")]
    pub latitude: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PhoneNumber {
    #[prost(uint64, tag = "1")]
    pub country_code: u64,
    #[prost(string, tag = "2")]
    pub default_country: String,
    #[prost(string, tag = "3")]
    pub input: String,
    #[prost(string, tag = "4")]
    pub international_formatted: String,
    #[prost(uint64, tag = "5")]
    pub national: u64,
    #[prost(string, tag = "6")]
    pub national_formatted: String,
    #[prost(bool, tag = "7")]
    pub valid: bool,
}

// ---------------------------------------------------------------------------
// aggregate
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AggregateRequest {
    #[prost(string, tag = "1")]
    pub collection: String,
    #[prost(string, tag = "10")]
    pub tenant: String,
    #[prost(bool, tag = "20")]
    pub objects_count: bool,
    #[prost(message, repeated, tag = "21")]
    pub aggregations: Vec<aggregate_request::Aggregation>,
    #[prost(uint32, optional, tag = "30")]
    pub object_limit: Option<u32>,
    #[prost(message, optional, tag = "31")]
    pub group_by: Option<aggregate_request::GroupBy>,
    #[prost(uint32, optional, tag = "32")]
    pub limit: Option<u32>,
    #[prost(message, optional, tag = "40")]
    pub filters: Option<Filters>,
    #[prost(oneof = "aggregate_request::Search", tags = "41, 42, 43, 44, 45, 46, 47, 48, 49, 50")]
    pub search: Option<aggregate_request::Search>,
}

pub mod aggregate_request {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GroupBy {
        #[prost(string, tag = "1")]
        pub collection: String,
        #[prost(string, tag = "2")]
        pub property: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Aggregation {
        #[prost(string, tag = "1")]
        pub property: String,
        #[prost(oneof = "aggregation::Aggregation", tags = "2, 3, 4, 5, 6, 7")]
        pub aggregation: Option<aggregation::Aggregation>,
    }

    pub mod aggregation {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Aggregation {
            #[prost(message, tag = "2")]
            Int(Integer),
            #[prost(message, tag = "3")]
            Number(Number),
            #[prost(message, tag = "4")]
            Text(Text),
            #[prost(message, tag = "5")]
            Boolean(Boolean),
            #[prost(message, tag = "6")]
            Date(Date),
            #[prost(message, tag = "7")]
            Reference(Reference),
        }

        #[derive(Clone, Copy, PartialEq, ::prost::Message)]
        pub struct Integer {
            #[prost(bool, tag = "1")]
            pub count: bool,
            #[prost(bool, tag = "2")]
            pub r#type: bool,
            #[prost(bool, tag = "3")]
            pub sum: bool,
            #[prost(bool, tag = "4")]
            pub mean: bool,
            #[prost(bool, tag = "5")]
            pub mode: bool,
            #[prost(bool, tag = "6")]
            pub median: bool,
            #[prost(bool, tag = "7")]
            pub maximum: bool,
            #[prost(bool, tag = "8")]
            pub minimum: bool,
        }

        #[derive(Clone, Copy, PartialEq, ::prost::Message)]
        pub struct Number {
            #[prost(bool, tag = "1")]
            pub count: bool,
            #[prost(bool, tag = "2")]
            pub r#type: bool,
            #[prost(bool, tag = "3")]
            pub sum: bool,
            #[prost(bool, tag = "4")]
            pub mean: bool,
            #[prost(bool, tag = "5")]
            pub mode: bool,
            #[prost(bool, tag = "6")]
            pub median: bool,
            #[prost(bool, tag = "7")]
            pub maximum: bool,
            #[prost(bool, tag = "8")]
            pub minimum: bool,
        }

        #[derive(Clone, Copy, PartialEq, ::prost::Message)]
        pub struct Text {
            #[prost(bool, tag = "1")]
            pub count: bool,
            #[prost(bool, tag = "2")]
            pub r#type: bool,
            #[prost(bool, tag = "3")]
            pub top_occurences: bool,
            #[prost(uint32, optional, tag = "4")]
            pub top_occurences_limit: Option<u32>,
        }

        #[derive(Clone, Copy, PartialEq, ::prost::Message)]
        pub struct Boolean {
            #[prost(bool, tag = "1")]
            pub count: bool,
            #[prost(bool, tag = "2")]
            pub r#type: bool,
            #[prost(bool, tag = "3")]
            pub total_true: bool,
            #[prost(bool, tag = "4")]
            pub total_false: bool,
            #[prost(bool, tag = "5")]
            pub percentage_true: bool,
            #[prost(bool, tag = "6")]
            pub percentage_false: bool,
        }

        #[derive(Clone, Copy, PartialEq, ::prost::Message)]
        pub struct Date {
            #[prost(bool, tag = "1")]
            pub count: bool,
            #[prost(bool, tag = "2")]
            pub r#type: bool,
            #[prost(bool, tag = "3")]
            pub median: bool,
            #[prost(bool, tag = "4")]
            pub mode: bool,
            #[prost(bool, tag = "5")]
            pub maximum: bool,
            #[prost(bool, tag = "6")]
            pub minimum: bool,
        }

        #[derive(Clone, Copy, PartialEq, ::prost::Message)]
        pub struct Reference {
            #[prost(bool, tag = "1")]
            pub r#type: bool,
            #[prost(bool, tag = "2")]
            pub pointing_to: bool,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Search {
        #[prost(message, tag = "41")]
        Hybrid(super::Hybrid),
        #[prost(message, tag = "42")]
        NearVector(super::NearVector),
        #[prost(message, tag = "43")]
        NearObject(super::NearObject),
        #[prost(message, tag = "44")]
        NearText(super::NearTextSearch),
        #[prost(message, tag = "45")]
        NearImage(super::NearMedia),
        #[prost(message, tag = "46")]
        NearAudio(super::NearMedia),
        #[prost(message, tag = "47")]
        NearVideo(super::NearMedia),
        #[prost(message, tag = "48")]
        NearDepth(super::NearMedia),
        #[prost(message, tag = "49")]
        NearThermal(super::NearMedia),
        #[prost(message, tag = "50")]
        NearImu(super::NearMedia),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AggregateReply {
    #[prost(float, tag = "1")]
    pub took: f32,
    #[prost(oneof = "aggregate_reply::Result", tags = "2, 3")]
    pub result: Option<aggregate_reply::Result>,
}

pub mod aggregate_reply {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        #[prost(message, tag = "2")]
        SingleResult(Single),
        #[prost(message, tag = "3")]
        GroupedResults(Grouped),
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Single {
        #[prost(int64, optional, tag = "1")]
        pub objects_count: Option<i64>,
        #[prost(message, optional, tag = "2")]
        pub aggregations: Option<Aggregations>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Grouped {
        #[prost(message, repeated, tag = "1")]
        pub groups: Vec<Group>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Group {
        #[prost(int64, optional, tag = "1")]
        pub objects_count: Option<i64>,
        #[prost(message, optional, tag = "2")]
        pub aggregations: Option<Aggregations>,
        #[prost(message, optional, tag = "3")]
        pub grouped_by: Option<GroupedBy>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GroupedBy {
        #[prost(string, repeated, tag = "1")]
        pub path: Vec<String>,
        #[prost(oneof = "grouped_by::Value", tags = "2, 3, 4, 5, 6")]
        pub value: Option<grouped_by::Value>,
    }

    pub mod grouped_by {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Value {
            #[prost(string, tag = "2")]
            Text(String),
            #[prost(int64, tag = "3")]
            Int(i64),
            #[prost(bool, tag = "4")]
            Boolean(bool),
            #[prost(double, tag = "5")]
            Number(f64),
            #[prost(message, tag = "6")]
            Texts(super::super::TextArray),
        }
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Aggregations {
        #[prost(message, repeated, tag = "1")]
        pub aggregations: Vec<aggregations::Aggregation>,
    }

    pub mod aggregations {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Aggregation {
            #[prost(string, tag = "1")]
            pub property: String,
            #[prost(oneof = "aggregation::Aggregation", tags = "2, 3, 4, 5, 6, 7")]
            pub aggregation: Option<aggregation::Aggregation>,
        }

        pub mod aggregation {
            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum Aggregation {
                #[prost(message, tag = "2")]
                Int(Integer),
                #[prost(message, tag = "3")]
                Number(Number),
                #[prost(message, tag = "4")]
                Text(Text),
                #[prost(message, tag = "5")]
                Boolean(Boolean),
                #[prost(message, tag = "6")]
                Date(Date),
                #[prost(message, tag = "7")]
                Reference(Reference),
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Integer {
                #[prost(int64, optional, tag = "1")]
                pub count: Option<i64>,
                #[prost(string, optional, tag = "2")]
                pub r#type: Option<String>,
                #[prost(double, optional, tag = "3")]
                pub mean: Option<f64>,
                #[prost(double, optional, tag = "4")]
                pub median: Option<f64>,
                #[prost(int64, optional, tag = "5")]
                pub mode: Option<i64>,
                #[prost(int64, optional, tag = "6")]
                pub maximum: Option<i64>,
                #[prost(int64, optional, tag = "7")]
                pub minimum: Option<i64>,
                #[prost(int64, optional, tag = "8")]
                pub sum: Option<i64>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Number {
                #[prost(int64, optional, tag = "1")]
                pub count: Option<i64>,
                #[prost(string, optional, tag = "2")]
                pub r#type: Option<String>,
                #[prost(double, optional, tag = "3")]
                pub mean: Option<f64>,
                #[prost(double, optional, tag = "4")]
                pub median: Option<f64>,
                #[prost(double, optional, tag = "5")]
                pub mode: Option<f64>,
                #[prost(double, optional, tag = "6")]
                pub maximum: Option<f64>,
                #[prost(double, optional, tag = "7")]
                pub minimum: Option<f64>,
                #[prost(double, optional, tag = "8")]
                pub sum: Option<f64>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Text {
                #[prost(int64, optional, tag = "1")]
                pub count: Option<i64>,
                #[prost(string, optional, tag = "2")]
                pub r#type: Option<String>,
                #[prost(message, optional, tag = "3")]
                pub top_occurences: Option<text::TopOccurrences>,
            }

            pub mod text {
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct TopOccurrences {
                    #[prost(message, repeated, tag = "1")]
                    pub items: Vec<TopOccurrence>,
                }

                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct TopOccurrence {
                    #[prost(string, tag = "1")]
                    pub value: String,
                    #[prost(int64, tag = "2")]
                    pub occurs: i64,
                }
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Boolean {
                #[prost(int64, optional, tag = "1")]
                pub count: Option<i64>,
                #[prost(string, optional, tag = "2")]
                pub r#type: Option<String>,
                #[prost(int64, optional, tag = "3")]
                pub total_true: Option<i64>,
                #[prost(int64, optional, tag = "4")]
                pub total_false: Option<i64>,
                #[prost(double, optional, tag = "5")]
                pub percentage_true: Option<f64>,
                #[prost(double, optional, tag = "6")]
                pub percentage_false: Option<f64>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Date {
                #[prost(int64, optional, tag = "1")]
                pub count: Option<i64>,
                #[prost(string, optional, tag = "2")]
                pub r#type: Option<String>,
                #[prost(string, optional, tag = "3")]
                pub median: Option<String>,
                #[prost(string, optional, tag = "4")]
                pub mode: Option<String>,
                #[prost(string, optional, tag = "5")]
                pub maximum: Option<String>,
                #[prost(string, optional, tag = "6")]
                pub minimum: Option<String>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Reference {
                #[prost(string, optional, tag = "1")]
                pub r#type: Option<String>,
                #[prost(string, repeated, tag = "2")]
                pub pointing_to: Vec<String>,
            }
        }
    }
}
