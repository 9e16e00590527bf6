use uuid::Uuid;

use crate::proto::v1;

use super::filter::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyLevel {
    One,
    Quorum,
    All,
}

impl ConsistencyLevel {
    pub fn to_wire(self) -> v1::ConsistencyLevel {
        match self {
            ConsistencyLevel::One => v1::ConsistencyLevel::One,
            ConsistencyLevel::Quorum => v1::ConsistencyLevel::Quorum,
            ConsistencyLevel::All => v1::ConsistencyLevel::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    pub property: String,
    pub ascending: bool,
}

impl SortBy {
    pub fn ascending(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ascending: true,
        }
    }

    pub fn descending(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ascending: false,
        }
    }
}

/// Unset fields are left for the server to default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Cursor: return objects after this id.
    pub after: Option<Uuid>,
    /// Cut the result set after this many score jumps.
    pub autocut: Option<u32>,
}

impl Pagination {
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBy {
    pub property: String,
    pub number_of_groups: u32,
    pub objects_per_group: u32,
}

impl GroupBy {
    pub fn new(property: impl Into<String>, number_of_groups: u32, objects_per_group: u32) -> Self {
        Self {
            property: property.into(),
            number_of_groups,
            objects_per_group,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rerank {
    pub property: String,
    pub query: Option<String>,
}

/// Prompts handed to the collection's generative module.
///
/// `single_prompt` runs once per result, `grouped_task` once over the whole
/// result set (optionally restricted to `grouped_properties`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerativeQuery {
    pub single_prompt: Option<String>,
    pub grouped_task: Option<String>,
    pub grouped_properties: Vec<String>,
}

impl GenerativeQuery {
    pub fn single(prompt: impl Into<String>) -> Self {
        Self {
            single_prompt: Some(prompt.into()),
            ..Default::default()
        }
    }

    pub fn grouped(task: impl Into<String>) -> Self {
        Self {
            grouped_task: Some(task.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.single_prompt.is_none() && self.grouped_task.is_none()
    }
}

/// Metadata fields to return. The object id is always returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataQuery {
    pub creation_time: bool,
    pub last_update_time: bool,
    pub distance: bool,
    pub certainty: bool,
    pub score: bool,
    pub explain_score: bool,
    pub is_consistent: bool,
    /// Return every vector. Ignored when `vectors` names a subset.
    pub vector: bool,
    pub vectors: Vec<String>,
}

impl MetadataQuery {
    /// Every scalar metadata field, no vectors.
    pub fn full() -> Self {
        Self {
            creation_time: true,
            last_update_time: true,
            distance: true,
            certainty: true,
            score: true,
            explain_score: true,
            is_consistent: true,
            ..Default::default()
        }
    }

    pub fn with_vectors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vectors = names.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyProjection {
    #[default]
    All,
    Only(Vec<String>),
}

impl PropertyProjection {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyProjection::Only(names.into_iter().map(Into::into).collect())
    }
}

/// Follows a cross-reference property and projects the referenced objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceQuery {
    pub link_on: String,
    /// Required for references that can point at several collections.
    pub target_collection: Option<String>,
    pub properties: PropertyProjection,
    pub metadata: MetadataQuery,
    pub references: Vec<ReferenceQuery>,
}

impl ReferenceQuery {
    pub fn new(link_on: impl Into<String>) -> Self {
        Self {
            link_on: link_on.into(),
            target_collection: None,
            properties: PropertyProjection::All,
            metadata: MetadataQuery::default(),
            references: Vec::new(),
        }
    }

    pub fn target_collection(mut self, collection: impl Into<String>) -> Self {
        self.target_collection = Some(collection.into());
        self
    }

    pub fn properties(mut self, properties: PropertyProjection) -> Self {
        self.properties = properties;
        self
    }

    pub fn metadata(mut self, metadata: MetadataQuery) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn reference(mut self, reference: ReferenceQuery) -> Self {
        self.references.push(reference);
        self
    }
}

/// Options shared by every search mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOptions {
    pub filter: Option<Filter>,
    pub sort: Vec<SortBy>,
    pub pagination: Pagination,
    pub group_by: Option<GroupBy>,
    pub rerank: Option<Rerank>,
    pub generative: Option<GenerativeQuery>,
    pub metadata: MetadataQuery,
    pub properties: PropertyProjection,
    pub references: Vec<ReferenceQuery>,
    pub tenant: Option<String>,
    pub consistency_level: Option<ConsistencyLevel>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sort(mut self, sort: SortBy) -> Self {
        self.sort.push(sort);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.pagination.offset = Some(offset);
        self
    }

    pub fn after(mut self, id: Uuid) -> Self {
        self.pagination.after = Some(id);
        self
    }

    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    pub fn rerank(mut self, property: impl Into<String>, query: Option<String>) -> Self {
        self.rerank = Some(Rerank {
            property: property.into(),
            query,
        });
        self
    }

    pub fn generative(mut self, generative: GenerativeQuery) -> Self {
        self.generative = Some(generative);
        self
    }

    pub fn metadata(mut self, metadata: MetadataQuery) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn properties(mut self, properties: PropertyProjection) -> Self {
        self.properties = properties;
        self
    }

    pub fn reference(mut self, reference: ReferenceQuery) -> Self {
        self.references.push(reference);
        self
    }

    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = Some(level);
        self
    }
}
