//! Typed cell values: coercion per column type, comparison, display text

use chrono::NaiveDateTime;
use contracts::shared::visualization::{ColumnDataType, DisplayAs, TableColumnOptions};
use serde_json::Value;
use std::cmp::Ordering;

use crate::shared::components::table::format_number;
use crate::shared::date_utils::{format_datetime, parse_datetime};

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Boolean(bool),
    Number(f64),
    DateTime(NaiveDateTime),
    Text(String),
    Json(Value),
}

impl CellValue {
    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Boolean(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::DateTime(_) => 3,
            CellValue::Text(_) => 4,
            CellValue::Json(_) => 5,
        }
    }
}

fn natural(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Boolean(*b),
        Value::Number(n) => n
            .as_f64()
            .map(CellValue::Number)
            .unwrap_or_else(|| CellValue::Text(n.to_string())),
        Value::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Json(other.clone()),
    }
}

/// Converts a raw value according to the column type.
/// Values that do not parse keep their natural representation.
pub fn coerce(value: &Value, data_type: ColumnDataType) -> CellValue {
    match (data_type, value) {
        (ColumnDataType::Integer | ColumnDataType::Float, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(CellValue::Number)
            .unwrap_or_else(|_| CellValue::Text(s.clone())),
        (ColumnDataType::Boolean, Value::String(s)) => match s.to_lowercase().as_str() {
            "true" => CellValue::Boolean(true),
            "false" => CellValue::Boolean(false),
            _ => CellValue::Text(s.clone()),
        },
        (ColumnDataType::Date | ColumnDataType::Datetime, Value::String(s)) => {
            parse_datetime(s)
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(s.clone()))
        }
        _ => natural(value),
    }
}

/// Ascending order: nulls first, then by kind, then by value
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Boolean(x), CellValue::Boolean(y)) => x.cmp(y),
        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
        (CellValue::DateTime(x), CellValue::DateTime(y)) => x.cmp(y),
        (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
        (CellValue::Json(x), CellValue::Json(y)) => x.to_string().cmp(&y.to_string()),
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Display text of a cell, also used for search matching
pub fn format_cell(cell: &CellValue, column: &TableColumnOptions) -> String {
    match (column.display_as, cell) {
        (_, CellValue::Null) => String::new(),
        (DisplayAs::Number, CellValue::Number(n)) => format_number(*n, column.number_format_decimals),
        (DisplayAs::Json, CellValue::Json(v)) => {
            serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
        }
        (_, CellValue::DateTime(dt)) => format_datetime(dt, &column.date_time_format),
        (_, CellValue::Boolean(b)) => b.to_string(),
        (_, CellValue::Number(n)) => n.to_string(),
        (_, CellValue::Text(s)) => s.clone(),
        (_, CellValue::Json(v)) => v.to_string(),
    }
}
