//! Aggregation requests and replies.
//!
//! Metrics are validated against their property's data type before the
//! request is built; an optional search restricts the aggregated objects.

pub mod builder;
pub mod metric;
pub mod params;
pub mod reply;


pub use builder::build_aggregate;
pub use metric::{Metric, MetricKind, Statistic};
pub use params::{AggregateGroupBy, AggregateParams, AggregateSearch};
pub use reply::{
    AggregateGroup, AggregateResult, GroupedByValue, PropertyAggregation, TopOccurrence,
    decode_aggregate_reply,
};
