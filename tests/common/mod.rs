//! Reply fixtures shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use weave::proto::v1;
use weave::vectors::{VectorData, pack_vector};

pub const ARTICLE: &str = "Article";

pub fn text(value: &str) -> v1::Value {
    v1::Value {
        kind: Some(v1::value::Kind::TextValue(value.to_string())),
    }
}

/// Builds one search hit with a `title` property.
pub struct HitBuilder {
    metadata: v1::MetadataResult,
    fields: HashMap<String, v1::Value>,
}

impl HitBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            metadata: v1::MetadataResult {
                id: id.to_string(),
                ..Default::default()
            },
            fields: HashMap::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.fields.insert("title".to_string(), text(title));
        self
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.metadata.distance = distance;
        self.metadata.distance_present = true;
        self
    }

    pub fn vector(mut self, name: &str, data: VectorData) -> Self {
        let (bytes, kind) = pack_vector(&data);
        self.metadata.vectors.push(v1::Vectors {
            name: name.to_string(),
            vector_bytes: bytes,
            r#type: kind as i32,
        });
        self
    }

    pub fn build(self) -> v1::SearchResult {
        v1::SearchResult {
            properties: Some(v1::PropertiesResult {
                non_ref_props: Some(v1::Properties {
                    fields: self.fields,
                }),
                ..Default::default()
            }),
            metadata: Some(self.metadata),
        }
    }
}

pub fn reply(hits: Vec<v1::SearchResult>) -> v1::SearchReply {
    v1::SearchReply {
        results: hits,
        ..Default::default()
    }
}
