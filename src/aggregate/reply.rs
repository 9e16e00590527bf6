use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use tracing::debug;

use crate::proto::v1;
use crate::proto::v1::aggregate_reply::{self, aggregations::aggregation, grouped_by};
use crate::results::DecodeError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopOccurrence {
    pub value: String,
    pub occurs: i64,
}

/// Computed statistics for one property. Statistics that were not requested,
/// or that the server could not compute, are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyAggregation {
    Integer {
        count: Option<i64>,
        mean: Option<f64>,
        median: Option<f64>,
        mode: Option<i64>,
        maximum: Option<i64>,
        minimum: Option<i64>,
        sum: Option<i64>,
    },
    Number {
        count: Option<i64>,
        mean: Option<f64>,
        median: Option<f64>,
        mode: Option<f64>,
        maximum: Option<f64>,
        minimum: Option<f64>,
        sum: Option<f64>,
    },
    Text {
        count: Option<i64>,
        top_occurrences: Vec<TopOccurrence>,
    },
    Boolean {
        count: Option<i64>,
        total_true: Option<i64>,
        total_false: Option<i64>,
        percentage_true: Option<f64>,
        percentage_false: Option<f64>,
    },
    Date {
        count: Option<i64>,
        median: Option<DateTime<FixedOffset>>,
        mode: Option<DateTime<FixedOffset>>,
        maximum: Option<DateTime<FixedOffset>>,
        minimum: Option<DateTime<FixedOffset>>,
    },
    Reference {
        pointing_to: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GroupedByValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Number(f64),
    Texts(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateGroup {
    pub property: String,
    pub value: Option<GroupedByValue>,
    pub total_count: Option<i64>,
    pub properties: BTreeMap<String, PropertyAggregation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AggregateResult {
    pub total_count: Option<i64>,
    pub properties: BTreeMap<String, PropertyAggregation>,
    /// Populated instead of the top-level fields when the request grouped.
    pub groups: Vec<AggregateGroup>,
}

pub fn decode_aggregate_reply(reply: v1::AggregateReply) -> Result<AggregateResult, DecodeError> {
    let result = match reply.result {
        None => AggregateResult::default(),
        Some(aggregate_reply::Result::SingleResult(single)) => AggregateResult {
            total_count: single.objects_count,
            properties: decode_aggregations(single.aggregations)?,
            groups: Vec::new(),
        },
        Some(aggregate_reply::Result::GroupedResults(grouped)) => AggregateResult {
            groups: grouped
                .groups
                .into_iter()
                .map(decode_group)
                .collect::<Result<_, _>>()?,
            ..Default::default()
        },
    };

    debug!(
        properties = result.properties.len(),
        groups = result.groups.len(),
        "Decoded aggregate reply"
    );

    Ok(result)
}

fn decode_group(group: aggregate_reply::Group) -> Result<AggregateGroup, DecodeError> {
    let grouped_by = group.grouped_by.unwrap_or_default();

    Ok(AggregateGroup {
        property: grouped_by.path.join("."),
        value: grouped_by.value.map(|v| match v {
            grouped_by::Value::Text(s) => GroupedByValue::Text(s),
            grouped_by::Value::Int(i) => GroupedByValue::Int(i),
            grouped_by::Value::Boolean(b) => GroupedByValue::Bool(b),
            grouped_by::Value::Number(n) => GroupedByValue::Number(n),
            grouped_by::Value::Texts(t) => GroupedByValue::Texts(t.values),
        }),
        total_count: group.objects_count,
        properties: decode_aggregations(group.aggregations)?,
    })
}

fn decode_aggregations(
    aggregations: Option<aggregate_reply::Aggregations>,
) -> Result<BTreeMap<String, PropertyAggregation>, DecodeError> {
    let mut out = BTreeMap::new();

    for entry in aggregations.map(|a| a.aggregations).unwrap_or_default() {
        let Some(kind) = entry.aggregation else {
            continue;
        };

        let decoded = match kind {
            aggregation::Aggregation::Int(i) => PropertyAggregation::Integer {
                count: i.count,
                mean: i.mean,
                median: i.median,
                mode: i.mode,
                maximum: i.maximum,
                minimum: i.minimum,
                sum: i.sum,
            },
            aggregation::Aggregation::Number(n) => PropertyAggregation::Number {
                count: n.count,
                mean: n.mean,
                median: n.median,
                mode: n.mode,
                maximum: n.maximum,
                minimum: n.minimum,
                sum: n.sum,
            },
            aggregation::Aggregation::Text(t) => PropertyAggregation::Text {
                count: t.count,
                top_occurrences: t
                    .top_occurences
                    .map(|top| top.items)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|item| TopOccurrence {
                        value: item.value,
                        occurs: item.occurs,
                    })
                    .collect(),
            },
            aggregation::Aggregation::Boolean(b) => PropertyAggregation::Boolean {
                count: b.count,
                total_true: b.total_true,
                total_false: b.total_false,
                percentage_true: b.percentage_true,
                percentage_false: b.percentage_false,
            },
            aggregation::Aggregation::Date(d) => PropertyAggregation::Date {
                count: d.count,
                median: parse_date(d.median)?,
                mode: parse_date(d.mode)?,
                maximum: parse_date(d.maximum)?,
                minimum: parse_date(d.minimum)?,
            },
            aggregation::Aggregation::Reference(r) => PropertyAggregation::Reference {
                pointing_to: r.pointing_to,
            },
        };

        out.insert(entry.property, decoded);
    }

    Ok(out)
}

fn parse_date(value: Option<String>) -> Result<Option<DateTime<FixedOffset>>, DecodeError> {
    value
        .map(|s| {
            DateTime::parse_from_rfc3339(&s).map_err(|e| DecodeError::InvalidDate {
                value: s.clone(),
                source: e,
            })
        })
        .transpose()
}
