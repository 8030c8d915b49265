use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::query_result::QueryColumn;

/// Current selection of a filter
///
/// Serialized as the bare value or array. Deserialization goes through
/// [`Filter`], whose `multiple` flag picks the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Selection of a multi-filter
    Multiple(Vec<Value>),
    /// Selection of a single-value filter
    Single(Value),
}

impl FilterValue {
    /// Selected values as a slice (one element for a single filter)
    pub fn values(&self) -> &[Value] {
        match self {
            FilterValue::Multiple(values) => values,
            FilterValue::Single(value) => std::slice::from_ref(value),
        }
    }
}

impl Default for FilterValue {
    fn default() -> Self {
        FilterValue::Single(Value::Null)
    }
}

/// Filter over one column of a query result
///
/// Local filters are derived from a visualization's own result, global ones are
/// shared across a dashboard and matched to local filters by `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFilter")]
pub struct Filter {
    /// Column name the filter applies to
    pub name: String,
    /// Label shown next to the filter control
    #[serde(default)]
    pub friendly_name: String,
    /// Source column
    pub column: QueryColumn,
    /// Possible values, unique, in first-seen order
    #[serde(default)]
    pub values: Vec<Value>,
    /// Current selection
    pub current: FilterValue,
    /// Multi-select filter
    pub multiple: bool,
}

#[derive(Deserialize)]
struct RawFilter {
    name: String,
    #[serde(default)]
    friendly_name: String,
    column: QueryColumn,
    #[serde(default)]
    values: Vec<Value>,
    #[serde(default)]
    current: Value,
    #[serde(default)]
    multiple: bool,
}

impl From<RawFilter> for Filter {
    fn from(raw: RawFilter) -> Self {
        let current = match (raw.multiple, raw.current) {
            (true, Value::Array(values)) => FilterValue::Multiple(values),
            (true, Value::Null) => FilterValue::Multiple(Vec::new()),
            (true, value) => FilterValue::Multiple(vec![value]),
            (false, value) => FilterValue::Single(value),
        };
        Filter {
            name: raw.name,
            friendly_name: raw.friendly_name,
            column: raw.column,
            values: raw.values,
            current,
            multiple: raw.multiple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(current: Value, multiple: bool) -> Filter {
        serde_json::from_value(json!({
            "name": "tags::filter",
            "column": {"name": "tags::filter", "type": "string"},
            "current": current,
            "multiple": multiple
        }))
        .unwrap()
    }

    #[test]
    fn test_single_filter_keeps_array_value() {
        let filter = parse(json!(["a", "b"]), false);
        assert_eq!(filter.current, FilterValue::Single(json!(["a", "b"])));
        assert_eq!(filter.current.values(), &[json!(["a", "b"])]);
    }

    #[test]
    fn test_multi_filter_selection() {
        assert_eq!(
            parse(json!(["a", "b"]), true).current,
            FilterValue::Multiple(vec![json!("a"), json!("b")])
        );
        assert_eq!(parse(json!("a"), true).current, FilterValue::Multiple(vec![json!("a")]));
        assert_eq!(parse(Value::Null, true).current, FilterValue::Multiple(vec![]));
    }

    #[test]
    fn test_missing_current_defaults() {
        let filter: Filter = serde_json::from_value(json!({
            "name": "region::filter",
            "column": {"name": "region::filter"}
        }))
        .unwrap();
        assert!(!filter.multiple);
        assert_eq!(filter.current, FilterValue::Single(Value::Null));
        assert_eq!(filter.friendly_name, "");
    }

    #[test]
    fn test_serialized_filter_reads_back() {
        let filter = parse(json!(["a"]), true);
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value["current"], json!(["a"]));
        assert_eq!(serde_json::from_value::<Filter>(value).unwrap(), filter);
    }
}
