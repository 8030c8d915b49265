//! Table options: stored JSON merged over per-column defaults

use contracts::shared::visualization::{
    ContentAlignment, DisplayAs, QueryColumn, TableColumnOptions, TableOptions,
    DEFAULT_ITEMS_PER_PAGE, TABLE,
};
use serde_json::{Map, Value};

use crate::shared::visualizations::error::VisualizationError;
use crate::shared::visualizations::query_result_data::{column_clean_name, QueryResultData};

/// Offset of default column positions, keeps them after explicitly ordered ones
const DEFAULT_ORDER_OFFSET: usize = 100_000;

fn default_column(column: &QueryColumn, index: usize) -> TableColumnOptions {
    TableColumnOptions {
        name: column.name.clone(),
        title: column_clean_name(&column.name).to_string(),
        data_type: column.data_type,
        display_as: DisplayAs::for_type(column.data_type),
        align_content: ContentAlignment::for_type(column.data_type),
        order: DEFAULT_ORDER_OFFSET + index,
        ..Default::default()
    }
}

fn merge(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

fn invalid(message: impl ToString) -> VisualizationError {
    VisualizationError::invalid_options(TABLE, message)
}

/// Resolves stored table options against the dataset.
///
/// Every dataset column gets an entry; stored entries override the defaults
/// by name, entries for columns missing from the dataset are dropped and the
/// column type always follows the dataset.
pub fn get_options(raw: &Value, data: &QueryResultData) -> Result<Value, VisualizationError> {
    let mut raw = match raw {
        Value::Null => Map::new(),
        Value::Object(map) => map.clone(),
        other => return Err(invalid(format!("expected an object, got {}", other))),
    };

    let stored_columns = match raw.remove("columns") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(columns)) => columns,
        Some(_) => return Err(invalid("columns must be an array")),
    };

    let mut columns = Vec::with_capacity(data.columns.len());
    for (index, column) in data.columns.iter().enumerate() {
        let defaults = serde_json::to_value(default_column(column, index)).map_err(invalid)?;
        let mut merged = match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let stored = stored_columns
            .iter()
            .filter_map(Value::as_object)
            .find(|map| map.get("name").and_then(Value::as_str) == Some(column.name.as_str()));
        if let Some(stored) = stored {
            merge(&mut merged, stored);
        }

        let mut options: TableColumnOptions =
            serde_json::from_value(Value::Object(merged)).map_err(invalid)?;
        options.data_type = column.data_type;
        columns.push(options);
    }
    columns.sort_by_key(|c| c.order);

    let mut options: TableOptions = serde_json::from_value(Value::Object(raw)).map_err(invalid)?;
    if options.items_per_page == 0 {
        options.items_per_page = DEFAULT_ITEMS_PER_PAGE;
    }
    options.columns = columns;

    serde_json::to_value(options).map_err(invalid)
}
