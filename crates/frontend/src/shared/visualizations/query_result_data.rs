//! Преобразование результата запроса в датасет визуализации

use contracts::shared::visualization::{Filter, FilterValue, QueryColumn, QueryResult, Row};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// Датасет, вычисляемый один раз на результат запроса
#[derive(Debug, Clone, Default)]
pub struct QueryResultData {
    pub columns: Vec<QueryColumn>,
    pub rows: Vec<Arc<Row>>,
    pub filters: Vec<Filter>,
}

// Строки неизменяемы, достаточно сравнить указатели
impl PartialEq for QueryResultData {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.filters == other.filters
            && same_rows(&self.rows, &other.rows)
    }
}

/// Колонки и (отфильтрованные) строки для конкретной визуализации
#[derive(Debug, Clone, Default)]
pub struct VisualizationData {
    pub columns: Vec<QueryColumn>,
    pub rows: Vec<Arc<Row>>,
}

impl PartialEq for VisualizationData {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && same_rows(&self.rows, &other.rows)
    }
}

fn same_rows(a: &[Arc<Row>], b: &[Arc<Row>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Arc::ptr_eq(x, y))
}

/// Колонки, строки и фильтры результата запроса
pub fn get_query_result_data(query_result: &QueryResult) -> QueryResultData {
    let columns = query_result.data.columns.clone();
    let rows: Vec<Arc<Row>> = query_result
        .data
        .rows
        .iter()
        .cloned()
        .map(Arc::new)
        .collect();
    let filters = get_filters(&columns, &rows);

    log::debug!(
        "query result data: {} columns, {} rows, {} filters",
        columns.len(),
        rows.len(),
        filters.len()
    );

    QueryResultData {
        columns,
        rows,
        filters,
    }
}

/// Разбирает `name::type` / `name__type`; `::` имеет приоритет
fn split_type(name: &str) -> Option<(&str, &str)> {
    name.split_once("::").or_else(|| name.split_once("__"))
}

/// Имя колонки без суффикса фильтра; прочие суффиксы остаются частью имени
pub fn column_clean_name(name: &str) -> &str {
    match split_type(name) {
        Some(("", rest)) if !rest.contains("::") && !rest.contains("__") => rest,
        Some((base, _)) if filter_kind(name).is_some() => base,
        _ => name,
    }
}

/// Имя без суффикса, каждое слово с заглавной буквы
pub fn column_friendly_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut word_start = true;
    for c in column_clean_name(name).chars() {
        if word_start && !c.is_whitespace() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        word_start = c.is_whitespace();
    }
    result
}

/// `Some(multiple)`, если имя колонки помечает её как фильтр
fn filter_kind(name: &str) -> Option<bool> {
    let (_, rest) = split_type(name)?;
    let suffix = rest
        .split_once("::")
        .or_else(|| rest.split_once("__"))
        .map_or(rest, |(suffix, _)| suffix);
    match suffix {
        "filter" => Some(false),
        "multi-filter" | "multiFilter" => Some(true),
        _ => None,
    }
}

fn get_filters(columns: &[QueryColumn], rows: &[Arc<Row>]) -> Vec<Filter> {
    columns
        .iter()
        .filter_map(|column| {
            let multiple = filter_kind(&column.name)?;

            let mut seen = HashSet::new();
            let mut values = Vec::new();
            for row in rows {
                let value = row.get(&column.name).cloned().unwrap_or(Value::Null);
                if seen.insert(value.to_string()) {
                    values.push(value);
                }
            }

            let first = rows
                .first()
                .map(|row| row.get(&column.name).cloned().unwrap_or(Value::Null));
            let current = match (multiple, first) {
                (true, Some(value)) => FilterValue::Multiple(vec![value]),
                (true, None) => FilterValue::Multiple(Vec::new()),
                (false, Some(value)) => FilterValue::Single(value),
                (false, None) => FilterValue::Single(Value::Null),
            };

            Some(Filter {
                name: column.name.clone(),
                friendly_name: column_friendly_name(&column.name),
                column: column.clone(),
                values,
                current,
                multiple,
            })
        })
        .collect()
}

/// Текстовое представление значения (`null` для пустых)
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
