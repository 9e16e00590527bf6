use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::constants::UNNAMED_VECTOR;
use crate::query::QueryError;

/// A single embedding or a multi-embedding matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VectorData {
    Single(Vec<f32>),
    Multi(Vec<Vec<f32>>),
}

impl VectorData {
    pub fn is_multi(&self) -> bool {
        matches!(self, VectorData::Multi(_))
    }

    /// Component count for single vectors, row count for multi-vectors.
    pub fn len(&self) -> usize {
        match self {
            VectorData::Single(v) => v.len(),
            VectorData::Multi(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f32>> for VectorData {
    fn from(v: Vec<f32>) -> Self {
        VectorData::Single(v)
    }
}

impl From<Vec<Vec<f32>>> for VectorData {
    fn from(rows: Vec<Vec<f32>>) -> Self {
        VectorData::Multi(rows)
    }
}

/// A vector tagged with the name of the vector index it targets.
///
/// The empty name is the collection's unnamed (default) vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedVector {
    pub name: String,
    pub data: VectorData,
}

impl NamedVector {
    pub fn new(name: impl Into<String>, data: impl Into<VectorData>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Creates a vector for the collection's unnamed vector index.
    pub fn unnamed(data: impl Into<VectorData>) -> Self {
        Self::new(UNNAMED_VECTOR, data)
    }

    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    pub fn is_multi_vector(&self) -> bool {
        self.data.is_multi()
    }
}

/// How the server merges scores from several target vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Combination {
    #[default]
    Unspecified,
    Sum,
    Average,
    Minimum,
    ManualWeights,
    RelativeScore,
}

impl Combination {
    /// Weighted combinations only keep the per-target shape when every
    /// target's vector count equals its weight count.
    pub fn requires_weight_match(&self) -> bool {
        matches!(self, Combination::ManualWeights | Combination::RelativeScore)
    }
}

/// Which named vectors a query runs against, and how their scores combine.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TargetVectorSpec {
    pub targets: Vec<String>,
    pub weights: BTreeMap<String, Vec<f32>>,
    pub combination: Combination,
}

impl TargetVectorSpec {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn sum<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(targets).with_combination(Combination::Sum)
    }

    pub fn average<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(targets).with_combination(Combination::Average)
    }

    pub fn minimum<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(targets).with_combination(Combination::Minimum)
    }

    /// Targets in the given order, each scored with its own weights.
    pub fn manual_weights<I, S>(weights: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        Self::weighted(weights, Combination::ManualWeights)
    }

    pub fn relative_score<I, S>(weights: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        Self::weighted(weights, Combination::RelativeScore)
    }

    fn weighted<I, S>(weights: I, combination: Combination) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut spec = Self {
            combination,
            ..Default::default()
        };
        for (name, w) in weights {
            let name = name.into();
            spec.targets.push(name.clone());
            spec.weights.insert(name, w);
        }
        spec
    }

    pub fn with_combination(mut self, combination: Combination) -> Self {
        self.combination = combination;
        self
    }

    pub fn has_weights(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Number of weights supplied for `name` (zero when it has none).
    pub fn weight_count(&self, name: &str) -> usize {
        self.weights.get(name).map_or(0, Vec::len)
    }

    /// Flattens the weights into `(target, weight)` pairs, target order first,
    /// then occurrence order within a target.
    pub fn weight_pairs(&self) -> Vec<(&str, f32)> {
        self.targets
            .iter()
            .flat_map(|target| {
                self.weights
                    .get(target)
                    .into_iter()
                    .flatten()
                    .map(move |&w| (target.as_str(), w))
            })
            .collect()
    }

    /// Rejects target lists that name the same vector twice.
    pub fn validate(&self) -> Result<(), QueryError> {
        let mut seen = HashSet::with_capacity(self.targets.len());
        for target in &self.targets {
            if !seen.insert(target.as_str()) {
                return Err(QueryError::DuplicateTargetVector {
                    name: target.clone(),
                });
            }
        }
        Ok(())
    }
}
