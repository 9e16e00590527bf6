use std::fmt;

use crate::proto::v1::aggregate_request::{Aggregation, aggregation};
use crate::query::QueryError;

/// Data type of the aggregated property. Decides which statistics are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Integer,
    Number,
    Text,
    Boolean,
    Date,
    Reference,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Integer => "integer",
            MetricKind::Number => "number",
            MetricKind::Text => "text",
            MetricKind::Boolean => "boolean",
            MetricKind::Date => "date",
            MetricKind::Reference => "reference",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Count,
    Type,
    Sum,
    Mean,
    Mode,
    Median,
    Maximum,
    Minimum,
    /// Most frequent values, optionally capped at `limit` entries.
    TopOccurrences { limit: Option<u32> },
    TotalTrue,
    TotalFalse,
    PercentageTrue,
    PercentageFalse,
    PointingTo,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::Type => "type",
            Statistic::Sum => "sum",
            Statistic::Mean => "mean",
            Statistic::Mode => "mode",
            Statistic::Median => "median",
            Statistic::Maximum => "maximum",
            Statistic::Minimum => "minimum",
            Statistic::TopOccurrences { .. } => "top_occurrences",
            Statistic::TotalTrue => "total_true",
            Statistic::TotalFalse => "total_false",
            Statistic::PercentageTrue => "percentage_true",
            Statistic::PercentageFalse => "percentage_false",
            Statistic::PointingTo => "pointing_to",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics to compute over one property.
///
/// An empty statistic list asks for everything the data type supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub property: String,
    pub kind: MetricKind,
    pub statistics: Vec<Statistic>,
}

impl Metric {
    pub fn new(property: impl Into<String>, kind: MetricKind) -> Self {
        Self {
            property: property.into(),
            kind,
            statistics: Vec::new(),
        }
    }

    pub fn integer(property: impl Into<String>) -> Self {
        Self::new(property, MetricKind::Integer)
    }

    pub fn number(property: impl Into<String>) -> Self {
        Self::new(property, MetricKind::Number)
    }

    pub fn text(property: impl Into<String>) -> Self {
        Self::new(property, MetricKind::Text)
    }

    pub fn boolean(property: impl Into<String>) -> Self {
        Self::new(property, MetricKind::Boolean)
    }

    pub fn date(property: impl Into<String>) -> Self {
        Self::new(property, MetricKind::Date)
    }

    pub fn reference(property: impl Into<String>) -> Self {
        Self::new(property, MetricKind::Reference)
    }

    pub fn with(mut self, statistic: Statistic) -> Self {
        self.statistics.push(statistic);
        self
    }

    pub(crate) fn to_wire(&self) -> Result<Aggregation, QueryError> {
        let all = self.statistics.is_empty();
        let wants = |s: Statistic| all || self.statistics.contains(&s);

        for statistic in &self.statistics {
            if !self.supports(*statistic) {
                return Err(QueryError::unsupported(
                    "metric",
                    format!(
                        "{statistic} on {} property '{}'",
                        self.kind.as_str(),
                        self.property
                    ),
                ));
            }
        }

        let kind = match self.kind {
            MetricKind::Integer => aggregation::Aggregation::Int(aggregation::Integer {
                count: wants(Statistic::Count),
                r#type: wants(Statistic::Type),
                sum: wants(Statistic::Sum),
                mean: wants(Statistic::Mean),
                mode: wants(Statistic::Mode),
                median: wants(Statistic::Median),
                maximum: wants(Statistic::Maximum),
                minimum: wants(Statistic::Minimum),
            }),
            MetricKind::Number => aggregation::Aggregation::Number(aggregation::Number {
                count: wants(Statistic::Count),
                r#type: wants(Statistic::Type),
                sum: wants(Statistic::Sum),
                mean: wants(Statistic::Mean),
                mode: wants(Statistic::Mode),
                median: wants(Statistic::Median),
                maximum: wants(Statistic::Maximum),
                minimum: wants(Statistic::Minimum),
            }),
            MetricKind::Text => {
                let top = self.statistics.iter().find_map(|s| match s {
                    Statistic::TopOccurrences { limit } => Some(*limit),
                    _ => None,
                });
                aggregation::Aggregation::Text(aggregation::Text {
                    count: wants(Statistic::Count),
                    r#type: wants(Statistic::Type),
                    top_occurences: all || top.is_some(),
                    top_occurences_limit: top.flatten(),
                })
            }
            MetricKind::Boolean => aggregation::Aggregation::Boolean(aggregation::Boolean {
                count: wants(Statistic::Count),
                r#type: wants(Statistic::Type),
                total_true: wants(Statistic::TotalTrue),
                total_false: wants(Statistic::TotalFalse),
                percentage_true: wants(Statistic::PercentageTrue),
                percentage_false: wants(Statistic::PercentageFalse),
            }),
            MetricKind::Date => aggregation::Aggregation::Date(aggregation::Date {
                count: wants(Statistic::Count),
                r#type: wants(Statistic::Type),
                median: wants(Statistic::Median),
                mode: wants(Statistic::Mode),
                maximum: wants(Statistic::Maximum),
                minimum: wants(Statistic::Minimum),
            }),
            MetricKind::Reference => {
                aggregation::Aggregation::Reference(aggregation::Reference {
                    r#type: wants(Statistic::Type),
                    pointing_to: wants(Statistic::PointingTo),
                })
            }
        };

        Ok(Aggregation {
            property: self.property.clone(),
            aggregation: Some(kind),
        })
    }

    fn supports(&self, statistic: Statistic) -> bool {
        use Statistic::*;

        match self.kind {
            MetricKind::Integer | MetricKind::Number => matches!(
                statistic,
                Count | Type | Sum | Mean | Mode | Median | Maximum | Minimum
            ),
            MetricKind::Text => matches!(statistic, Count | Type | TopOccurrences { .. }),
            MetricKind::Boolean => matches!(
                statistic,
                Count | Type | TotalTrue | TotalFalse | PercentageTrue | PercentageFalse
            ),
            MetricKind::Date => {
                matches!(statistic, Count | Type | Median | Mode | Maximum | Minimum)
            }
            MetricKind::Reference => matches!(statistic, Type | PointingTo),
        }
    }
}
