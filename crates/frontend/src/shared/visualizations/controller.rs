//! Владелец состояния визуализации: датасет и локальные фильтры
//!
//! Две независимые реакции:
//! - `on_query_result` - новый результат запроса, фильтры датасета
//!   объединяются с текущими глобальными;
//! - `on_global_filters` - изменились только глобальные фильтры, их значения
//!   переносятся в текущие локальные фильтры (пользовательские изменения
//!   локальных фильтров не теряются).
//!
//! Все методы возвращают `true`, если состояние изменилось.

use contracts::shared::visualization::{Filter, QueryResult};
use std::borrow::Cow;
use std::sync::Arc;

use super::filters::{combine_filters, filter_data};
use super::query_result_data::{get_query_result_data, QueryResultData, VisualizationData};

#[derive(Debug, Clone)]
pub struct VisualizationController {
    source: Arc<QueryResult>,
    data: Arc<QueryResultData>,
    filters: Vec<Filter>,
}

impl VisualizationController {
    pub fn new(query_result: Arc<QueryResult>, global_filters: &[Filter]) -> Self {
        let data = Arc::new(get_query_result_data(&query_result));
        let filters = combine_filters(&data.filters, global_filters).into_owned();
        Self {
            source: query_result,
            data,
            filters,
        }
    }

    /// Датасет текущего результата запроса
    pub fn data(&self) -> &Arc<QueryResultData> {
        &self.data
    }

    /// Текущие локальные фильтры
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Пересчитывает датасет один раз на каждый новый результат запроса
    pub fn on_query_result(
        &mut self,
        query_result: Arc<QueryResult>,
        global_filters: &[Filter],
    ) -> bool {
        if Arc::ptr_eq(&self.source, &query_result) {
            return false;
        }

        self.data = Arc::new(get_query_result_data(&query_result));
        self.source = query_result;
        self.filters = combine_filters(&self.data.filters, global_filters).into_owned();
        log::debug!(
            "visualization dataset replaced, {} local filters",
            self.filters.len()
        );
        true
    }

    pub fn on_global_filters(&mut self, global_filters: &[Filter]) -> bool {
        let combined = match combine_filters(&self.filters, global_filters) {
            Cow::Borrowed(_) => return false,
            Cow::Owned(combined) => combined,
        };
        self.replace_filters(combined)
    }

    /// Изменение фильтров пользователем
    pub fn set_filters(&mut self, filters: Vec<Filter>) -> bool {
        self.replace_filters(filters)
    }

    fn replace_filters(&mut self, filters: Vec<Filter>) -> bool {
        if self.filters == filters {
            return false;
        }
        log::debug!("local filters updated: {} filters", filters.len());
        self.filters = filters;
        true
    }

    /// Колонки и строки, прошедшие локальные фильтры
    pub fn filtered_data(&self) -> VisualizationData {
        VisualizationData {
            columns: self.data.columns.clone(),
            rows: filter_data(&self.data.rows, &self.filters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::visualization::{
        ColumnDataType, FilterValue, QueryColumn, QueryResultPayload,
    };
    use serde_json::{json, Value};

    fn query_result(rows: Vec<Value>) -> Arc<QueryResult> {
        Arc::new(QueryResult {
            data: QueryResultPayload {
                columns: vec![
                    QueryColumn::new("name", ColumnDataType::String),
                    QueryColumn::new("region::filter", ColumnDataType::String),
                ],
                rows: rows
                    .into_iter()
                    .map(|v| v.as_object().cloned().unwrap())
                    .collect(),
            },
            ..Default::default()
        })
    }

    fn sample() -> Arc<QueryResult> {
        query_result(vec![
            json!({"name": "Ann", "region::filter": "US"}),
            json!({"name": "Bob", "region::filter": "EU"}),
        ])
    }

    fn global(current: &str) -> Filter {
        Filter {
            name: "region::filter".to_string(),
            friendly_name: "Region".to_string(),
            column: QueryColumn::new("region::filter", ColumnDataType::String),
            values: vec![],
            current: FilterValue::Single(json!(current)),
            multiple: false,
        }
    }

    #[test]
    fn test_new_applies_dataset_filters() {
        let controller = VisualizationController::new(sample(), &[]);
        assert_eq!(controller.filters().len(), 1);
        // по умолчанию выбрано значение первой строки
        let data = controller.filtered_data();
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0]["name"], json!("Ann"));
    }

    #[test]
    fn test_new_adopts_global_selection() {
        let controller = VisualizationController::new(sample(), &[global("EU")]);
        assert_eq!(
            controller.filters()[0].current,
            FilterValue::Single(json!("EU"))
        );
        assert_eq!(controller.filters()[0].values, vec![json!("US"), json!("EU")]);
        assert_eq!(controller.filtered_data().rows[0]["name"], json!("Bob"));
    }

    #[test]
    fn test_same_query_result_is_not_rederived() {
        let source = sample();
        let mut controller = VisualizationController::new(Arc::clone(&source), &[]);
        let data = Arc::clone(controller.data());
        assert!(!controller.on_query_result(source, &[]));
        assert!(Arc::ptr_eq(&data, controller.data()));
    }

    #[test]
    fn test_new_query_result_resets_user_filters() {
        let mut controller = VisualizationController::new(sample(), &[]);
        let mut changed = controller.filters().to_vec();
        changed[0].current = FilterValue::Single(json!("EU"));
        assert!(controller.set_filters(changed));

        assert!(controller.on_query_result(sample(), &[]));
        assert_eq!(
            controller.filters()[0].current,
            FilterValue::Single(json!("US"))
        );
    }

    #[test]
    fn test_global_change_keeps_local_definitions() {
        let mut controller = VisualizationController::new(sample(), &[]);
        assert!(controller.on_global_filters(&[global("EU")]));
        let filter = &controller.filters()[0];
        assert_eq!(filter.values, vec![json!("US"), json!("EU")]);
        assert_eq!(filter.current, FilterValue::Single(json!("EU")));

        // тот же выбор: без изменений
        assert!(!controller.on_global_filters(&[global("EU")]));
        // нет глобальных: без изменений
        assert!(!controller.on_global_filters(&[]));
    }

    #[test]
    fn test_global_change_keeps_user_selection_of_other_filters() {
        let two_filters = Arc::new(QueryResult {
            data: QueryResultPayload {
                columns: vec![
                    QueryColumn::new("region::filter", ColumnDataType::String),
                    QueryColumn::new("city::filter", ColumnDataType::String),
                ],
                rows: vec![
                    json!({"region::filter": "US", "city::filter": "Boston"}),
                    json!({"region::filter": "EU", "city::filter": "Berlin"}),
                ]
                .into_iter()
                .map(|v| v.as_object().cloned().unwrap())
                .collect(),
            },
            ..Default::default()
        });
        let mut controller = VisualizationController::new(two_filters, &[]);

        let mut changed = controller.filters().to_vec();
        changed[0].current = FilterValue::Single(json!("EU"));
        assert!(controller.set_filters(changed));

        let mut city = global("Berlin");
        city.name = "city::filter".to_string();
        city.column = QueryColumn::new("city::filter", ColumnDataType::String);
        assert!(controller.on_global_filters(&[city]));

        let filters = controller.filters();
        assert_eq!(filters[0].name, "region::filter");
        assert_eq!(filters[0].current, FilterValue::Single(json!("EU")));
        assert_eq!(filters[1].current, FilterValue::Single(json!("Berlin")));
        assert_eq!(filters[1].values, vec![json!("Boston"), json!("Berlin")]);
    }

    #[test]
    fn test_set_filters_reports_changes_only() {
        let mut controller = VisualizationController::new(sample(), &[]);
        let same = controller.filters().to_vec();
        assert!(!controller.set_filters(same));
    }
}
