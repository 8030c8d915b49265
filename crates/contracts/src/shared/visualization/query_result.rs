use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single result row: column name -> raw JSON value
pub type Row = Map<String, Value>;

/// Column data type as reported by the query runner
///
/// Unknown or missing types are treated as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ColumnDataType {
    #[default]
    String,
    Integer,
    Float,
    Boolean,
    Date,
    Datetime,
}

impl ColumnDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnDataType::String => "string",
            ColumnDataType::Integer => "integer",
            ColumnDataType::Float => "float",
            ColumnDataType::Boolean => "boolean",
            ColumnDataType::Date => "date",
            ColumnDataType::Datetime => "datetime",
        }
    }

    /// Integer or float
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnDataType::Integer | ColumnDataType::Float)
    }
}

impl From<Option<String>> for ColumnDataType {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(str::to_lowercase).as_deref() {
            Some("integer") => ColumnDataType::Integer,
            Some("float") => ColumnDataType::Float,
            Some("boolean") => ColumnDataType::Boolean,
            Some("date") => ColumnDataType::Date,
            Some("datetime") => ColumnDataType::Datetime,
            _ => ColumnDataType::String,
        }
    }
}

impl From<ColumnDataType> for String {
    fn from(value: ColumnDataType) -> Self {
        value.as_str().to_string()
    }
}

/// Column of a query result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryColumn {
    /// Column name as returned by the query (may carry a `::filter` suffix)
    pub name: String,
    /// Optional display name provided by the query runner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Column type
    #[serde(rename = "type", default)]
    pub data_type: ColumnDataType,
}

impl QueryColumn {
    pub fn new(name: impl Into<String>, data_type: ColumnDataType) -> Self {
        Self {
            name: name.into(),
            friendly_name: None,
            data_type,
        }
    }
}

/// Columns and rows of an executed query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResultPayload {
    #[serde(default)]
    pub columns: Vec<QueryColumn>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// Query result as delivered by the data-fetching layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Query result identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Query text that produced the result
    #[serde(default)]
    pub query: Option<String>,
    /// Result data
    #[serde(default)]
    pub data: QueryResultPayload,
    /// Retrieval timestamp
    #[serde(default)]
    pub retrieved_at: Option<DateTime<Utc>>,
    /// Execution time in seconds
    #[serde(default)]
    pub runtime: Option<f64>,
}
