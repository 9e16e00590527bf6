use crate::proto::v1;
use crate::proto::v1::filters::TestValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    Like,
    IsNull,
    ContainsAny,
    ContainsAll,
    WithinGeoRange,
}

impl FilterOperator {
    fn to_wire(self) -> v1::FilterOperator {
        match self {
            FilterOperator::Equal => v1::FilterOperator::Equal,
            FilterOperator::NotEqual => v1::FilterOperator::NotEqual,
            FilterOperator::GreaterThan => v1::FilterOperator::GreaterThan,
            FilterOperator::GreaterThanEqual => v1::FilterOperator::GreaterThanEqual,
            FilterOperator::LessThan => v1::FilterOperator::LessThan,
            FilterOperator::LessThanEqual => v1::FilterOperator::LessThanEqual,
            FilterOperator::Like => v1::FilterOperator::Like,
            FilterOperator::IsNull => v1::FilterOperator::IsNull,
            FilterOperator::ContainsAny => v1::FilterOperator::ContainsAny,
            FilterOperator::ContainsAll => v1::FilterOperator::ContainsAll,
            FilterOperator::WithinGeoRange => v1::FilterOperator::WithinGeoRange,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Number(f64),
    TextArray(Vec<String>),
    IntArray(Vec<i64>),
    BoolArray(Vec<bool>),
    NumberArray(Vec<f64>),
    Geo {
        latitude: f32,
        longitude: f32,
        distance: f32,
    },
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Number(v)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(v: Vec<String>) -> Self {
        FilterValue::TextArray(v)
    }
}

impl FilterValue {
    fn to_wire(&self) -> TestValue {
        match self {
            FilterValue::Text(v) => TestValue::ValueText(v.clone()),
            FilterValue::Int(v) => TestValue::ValueInt(*v),
            FilterValue::Bool(v) => TestValue::ValueBoolean(*v),
            FilterValue::Number(v) => TestValue::ValueNumber(*v),
            FilterValue::TextArray(values) => TestValue::ValueTextArray(v1::TextArray {
                values: values.clone(),
            }),
            FilterValue::IntArray(values) => TestValue::ValueIntArray(v1::IntArray {
                values: values.clone(),
            }),
            FilterValue::BoolArray(values) => TestValue::ValueBooleanArray(v1::BooleanArray {
                values: values.clone(),
            }),
            FilterValue::NumberArray(values) => TestValue::ValueNumberArray(v1::NumberArray {
                values: values.clone(),
            }),
            FilterValue::Geo {
                latitude,
                longitude,
                distance,
            } => TestValue::ValueGeo(v1::GeoCoordinatesFilter {
                latitude: *latitude,
                longitude: *longitude,
                distance: *distance,
            }),
        }
    }
}

/// Boolean filter tree over object properties.
///
/// `path` is a single property name, or a reference path such as
/// `["writtenBy", "Author", "name"]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Condition {
        path: Vec<String>,
        operator: FilterOperator,
        value: FilterValue,
    },
}

impl Filter {
    pub fn condition(
        property: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Filter::Condition {
            path: vec![property.into()],
            operator,
            value: value.into(),
        }
    }

    pub fn equal(property: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::condition(property, FilterOperator::Equal, value)
    }

    pub fn is_null(property: impl Into<String>, is_null: bool) -> Self {
        Self::condition(property, FilterOperator::IsNull, is_null)
    }

    pub fn within_geo_range(
        property: impl Into<String>,
        latitude: f32,
        longitude: f32,
        distance: f32,
    ) -> Self {
        Self::condition(
            property,
            FilterOperator::WithinGeoRange,
            FilterValue::Geo {
                latitude,
                longitude,
                distance,
            },
        )
    }

    pub fn to_wire(&self) -> v1::Filters {
        match self {
            Filter::And(filters) => v1::Filters {
                operator: v1::FilterOperator::And as i32,
                filters: filters.iter().map(Filter::to_wire).collect(),
                ..Default::default()
            },
            Filter::Or(filters) => v1::Filters {
                operator: v1::FilterOperator::Or as i32,
                filters: filters.iter().map(Filter::to_wire).collect(),
                ..Default::default()
            },
            Filter::Condition {
                path,
                operator,
                value,
            } => v1::Filters {
                operator: operator.to_wire() as i32,
                on: path.clone(),
                test_value: Some(value.to_wire()),
                ..Default::default()
            },
        }
    }
}
