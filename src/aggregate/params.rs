use crate::query::{
    Filter, HybridParams, NearMediaParams, NearObjectParams, NearTextParams, NearVectorParams,
};

use super::metric::Metric;

/// Restricts the aggregated objects to the results of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateSearch {
    NearVector(NearVectorParams),
    NearText(NearTextParams),
    NearObject(NearObjectParams),
    NearMedia(NearMediaParams),
    Hybrid(HybridParams),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateGroupBy {
    pub property: String,
    /// Maximum number of groups returned.
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateParams {
    pub search: Option<AggregateSearch>,
    pub metrics: Vec<Metric>,
    pub total_count: bool,
    pub group_by: Option<AggregateGroupBy>,
    /// Caps how many search hits feed the aggregation.
    pub object_limit: Option<u32>,
    pub filter: Option<Filter>,
    pub tenant: Option<String>,
}

impl AggregateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_count(mut self) -> Self {
        self.total_count = true;
        self
    }

    pub fn metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    pub fn search(mut self, search: AggregateSearch) -> Self {
        self.search = Some(search);
        self
    }

    pub fn group_by(mut self, property: impl Into<String>, limit: Option<u32>) -> Self {
        self.group_by = Some(AggregateGroupBy {
            property: property.into(),
            limit,
        });
        self
    }

    pub fn object_limit(mut self, limit: u32) -> Self {
        self.object_limit = Some(limit);
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }
}
