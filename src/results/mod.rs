//! Reply decoding into plain Rust values.

pub mod decoder;
pub mod error;
pub mod model;


pub use decoder::{decode_group_by_reply, decode_properties, decode_reply, decode_search_reply};
pub use error::DecodeError;
pub use model::{
    DecodedObject, GeoCoordinate, Group, GroupByResult, GroupedObject, ListValue, ObjectMetadata,
    PhoneNumber, Properties, PropertyValue, QueryResult, SearchResponse,
};
