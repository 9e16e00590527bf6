use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::vectors::{NamedVector, TargetVectorSpec, VectorData};

use super::error::QueryError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NearVectorParams {
    pub vectors: Vec<NamedVector>,
    pub target: Option<TargetVectorSpec>,
    pub certainty: Option<f64>,
    pub distance: Option<f64>,
}

impl NearVectorParams {
    pub fn new(vectors: Vec<NamedVector>) -> Self {
        Self {
            vectors,
            ..Default::default()
        }
    }

    /// Searches the collection's unnamed vector.
    pub fn unnamed(data: impl Into<VectorData>) -> Self {
        Self::new(vec![NamedVector::unnamed(data)])
    }

    pub fn target(mut self, target: TargetVectorSpec) -> Self {
        self.target = Some(target);
        self
    }

    pub fn certainty(mut self, certainty: f64) -> Self {
        self.certainty = Some(certainty);
        self
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }
}

/// Steers a near-text query toward or away from concepts and/or objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub force: f32,
    pub concepts: Vec<String>,
    pub objects: Vec<Uuid>,
}

impl Move {
    pub fn concepts<I, S>(force: f32, concepts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            force,
            concepts: concepts.into_iter().map(Into::into).collect(),
            objects: Vec::new(),
        }
    }

    pub fn objects(force: f32, objects: Vec<Uuid>) -> Self {
        Self {
            force,
            concepts: Vec::new(),
            objects,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NearTextParams {
    pub queries: Vec<String>,
    pub certainty: Option<f64>,
    pub distance: Option<f64>,
    pub move_to: Option<Move>,
    pub move_away: Option<Move>,
    pub target: Option<TargetVectorSpec>,
}

impl NearTextParams {
    pub fn new<I, S>(queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queries: queries.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn certainty(mut self, certainty: f64) -> Self {
        self.certainty = Some(certainty);
        self
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn move_to(mut self, steer: Move) -> Self {
        self.move_to = Some(steer);
        self
    }

    pub fn move_away(mut self, steer: Move) -> Self {
        self.move_away = Some(steer);
        self
    }

    pub fn target(mut self, target: TargetVectorSpec) -> Self {
        self.target = Some(target);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearObjectParams {
    pub id: Uuid,
    pub certainty: Option<f64>,
    pub distance: Option<f64>,
    pub target: Option<TargetVectorSpec>,
}

impl NearObjectParams {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            certainty: None,
            distance: None,
            target: None,
        }
    }

    pub fn target(mut self, target: TargetVectorSpec) -> Self {
        self.target = Some(target);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Depth,
    Thermal,
    Imu,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Depth => "depth",
            MediaKind::Thermal => "thermal",
            MediaKind::Imu => "imu",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            "audio" => Ok(MediaKind::Audio),
            "depth" => Ok(MediaKind::Depth),
            "thermal" => Ok(MediaKind::Thermal),
            "imu" => Ok(MediaKind::Imu),
            _ => Err(QueryError::unsupported("media", s)),
        }
    }
}

/// Raw media bytes; base64-encoded when the request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct NearMediaParams {
    pub kind: MediaKind,
    pub media: Vec<u8>,
    pub certainty: Option<f64>,
    pub distance: Option<f64>,
    pub target: Option<TargetVectorSpec>,
}

impl NearMediaParams {
    pub fn new(kind: MediaKind, media: Vec<u8>) -> Self {
        Self {
            kind,
            media,
            certainty: None,
            distance: None,
            target: None,
        }
    }

    pub fn target(mut self, target: TargetVectorSpec) -> Self {
        self.target = Some(target);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bm25Operator {
    And,
    /// `minimum_match` defaults to one matching token.
    Or { minimum_match: Option<i32> },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bm25Params {
    pub query: String,
    pub properties: Vec<String>,
    pub operator: Option<Bm25Operator>,
}

impl Bm25Params {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn operator(mut self, operator: Bm25Operator) -> Self {
        self.operator = Some(operator);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FusionType {
    Ranked,
    RelativeScore,
}

/// Vector side of a hybrid search.
#[derive(Debug, Clone, PartialEq)]
pub enum HybridVectorInput {
    Vectors(Vec<NamedVector>),
    NearVector(NearVectorParams),
    NearText(NearTextParams),
}

impl HybridVectorInput {
    pub fn is_empty(&self) -> bool {
        match self {
            HybridVectorInput::Vectors(vectors) => vectors.is_empty(),
            HybridVectorInput::NearVector(params) => params.vectors.is_empty(),
            HybridVectorInput::NearText(params) => params.queries.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HybridParams {
    pub query: Option<String>,
    /// Ignored (forced to 1.0) when `query` is empty.
    pub alpha: Option<f32>,
    pub vector: Option<HybridVectorInput>,
    /// Applies to the nested near-vector / near-text search too. Setting a
    /// target on both is rejected.
    pub target: Option<TargetVectorSpec>,
    pub properties: Vec<String>,
    pub fusion: Option<FusionType>,
    pub bm25_operator: Option<Bm25Operator>,
}

impl HybridParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Hybrid search with no keyword part.
    pub fn vector_only(vector: HybridVectorInput) -> Self {
        Self {
            vector: Some(vector),
            ..Default::default()
        }
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn vector(mut self, vector: HybridVectorInput) -> Self {
        self.vector = Some(vector);
        self
    }

    pub fn target(mut self, target: TargetVectorSpec) -> Self {
        self.target = Some(target);
        self
    }

    pub fn fusion(mut self, fusion: FusionType) -> Self {
        self.fusion = Some(fusion);
        self
    }
}
