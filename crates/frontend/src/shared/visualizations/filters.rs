//! Синхронизация локальных и глобальных фильтров, применение фильтров к строкам

use contracts::shared::visualization::{Filter, FilterValue, Row};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

use super::query_result_data::value_to_string;

/// Переносит выбор глобальных фильтров в локальные по имени.
///
/// Локальный фильтр сохраняет своё описание (`name`, `values`), глобальный с тем
/// же именем задаёт `current`; берётся первое совпадение. Если одна из сторон
/// пуста, локальные фильтры возвращаются заимствованными без изменений.
pub fn combine_filters<'a>(local: &'a [Filter], global: &[Filter]) -> Cow<'a, [Filter]> {
    if local.is_empty() || global.is_empty() {
        return Cow::Borrowed(local);
    }

    Cow::Owned(
        local
            .iter()
            .map(|local_filter| {
                match global.iter().find(|f| f.name == local_filter.name) {
                    Some(global_filter) => Filter {
                        current: global_filter.current.clone(),
                        ..local_filter.clone()
                    },
                    None => local_filter.clone(),
                }
            })
            .collect(),
    )
}

/// Оставляет строки, значение которых входит в текущий выбор каждого фильтра
pub fn filter_data(rows: &[Arc<Row>], filters: &[Filter]) -> Vec<Arc<Row>> {
    if filters.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| filters.iter().all(|filter| row_matches(row, filter)))
        .cloned()
        .collect()
}

fn row_matches(row: &Row, filter: &Filter) -> bool {
    let row_value = row.get(&filter.name).unwrap_or(&Value::Null);
    filter.current.values().iter().any(|filter_value| {
        filter_value == row_value
            || matches!(filter_value, Value::String(s) if *s == value_to_string(row_value))
    })
}

/// Копия `filters` с новым выбором для фильтра `index`
pub fn with_selection(filters: &[Filter], index: usize, current: FilterValue) -> Vec<Filter> {
    filters
        .iter()
        .enumerate()
        .map(|(i, filter)| {
            if i == index {
                Filter {
                    current: current.clone(),
                    ..filter.clone()
                }
            } else {
                filter.clone()
            }
        })
        .collect()
}

/// Входит ли `value` в текущий выбор фильтра
pub fn is_selected(filter: &Filter, value: &Value) -> bool {
    filter.current.values().contains(value)
}
