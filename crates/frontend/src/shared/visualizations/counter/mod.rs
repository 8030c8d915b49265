//! Counter visualization: one cell value, optionally compared with a target

use contracts::shared::visualization::{CounterOptions, Row, COUNTER};
use leptos::prelude::*;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

use super::error::VisualizationError;
use super::query_result_data::{value_to_string, QueryResultData, VisualizationData};
use super::registry::{RendererProps, VisualizationKind};
use crate::shared::components::table::format_number_with_decimals;

pub const KIND: VisualizationKind = VisualizationKind {
    kind: COUNTER,
    name: "Counter",
    get_options,
    render,
};

pub fn get_options(raw: &Value, _data: &QueryResultData) -> Result<Value, VisualizationError> {
    let options: CounterOptions = match raw {
        Value::Null => CounterOptions::default(),
        other => serde_json::from_value(other.clone())
            .map_err(|e| VisualizationError::invalid_options(COUNTER, e))?,
    };
    serde_json::to_value(options).map_err(|e| VisualizationError::invalid_options(COUNTER, e))
}

/// Value of `column` in the 1-based `row_number`
fn cell(rows: &[Arc<Row>], row_number: usize, column: &str) -> Option<Value> {
    rows.get(row_number.checked_sub(1)?)?.get(column).cloned()
}

/// Number with the configured decimals, or the plain text, with prefix and suffix
pub fn format_counter(value: &Value, options: &CounterOptions) -> String {
    let text = match value {
        Value::Null => return String::new(),
        Value::Number(n) => n
            .as_f64()
            .map(|n| format_number_with_decimals(n, options.string_decimal))
            .unwrap_or_else(|| n.to_string()),
        other => value_to_string(other),
    };
    format!("{}{}{}", options.string_prefix, text, options.string_suffix)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterDisplay {
    pub value: String,
    pub target: Option<String>,
    /// Counter compared with the target, both numeric
    pub trend: Option<Ordering>,
}

pub fn counter_display(data: &VisualizationData, options: &CounterOptions) -> CounterDisplay {
    let value = cell(&data.rows, options.row_number, &options.counter_col_name);
    let target = options
        .target_col_name
        .as_deref()
        .and_then(|column| cell(&data.rows, options.target_row_number, column));

    let trend = match (
        value.as_ref().and_then(Value::as_f64),
        target.as_ref().and_then(Value::as_f64),
    ) {
        (Some(value), Some(target)) => value.partial_cmp(&target),
        _ => None,
    };

    CounterDisplay {
        value: value
            .map(|v| format_counter(&v, options))
            .unwrap_or_default(),
        target: target.map(|t| format_counter(&t, options)),
        trend,
    }
}

pub fn render(props: RendererProps) -> Result<AnyView, VisualizationError> {
    let options: CounterOptions = serde_json::from_value(props.options.as_ref().clone())
        .map_err(|e| VisualizationError::render(COUNTER, e))?;
    if options.row_number == 0 || options.target_row_number == 0 {
        return Err(VisualizationError::render(COUNTER, "row numbers start at 1"));
    }

    let label = if options.counter_label.is_empty() {
        props.visualization_name
    } else {
        options.counter_label.clone()
    };

    Ok(view! { <CounterRenderer options=options data=props.data label=label /> }.into_any())
}

#[component]
pub fn CounterRenderer(
    options: CounterOptions,
    #[prop(into)] data: Signal<VisualizationData>,
    #[prop(into)] label: String,
) -> impl IntoView {
    let display = Memo::new(move |_| data.with(|d| counter_display(d, &options)));

    let value_class = move || match display.with(|d| d.trend) {
        Some(Ordering::Greater) => "counter-visualization__value counter-visualization__value--positive",
        Some(Ordering::Less) => "counter-visualization__value counter-visualization__value--negative",
        _ => "counter-visualization__value",
    };

    view! {
        <div class="counter-visualization" style="display: flex; flex-direction: column; align-items: center; padding: 16px;">
            <div class=value_class style="font-size: 36px; font-weight: 600;">
                {move || display.with(|d| d.value.clone())}
            </div>
            {move || display.with(|d| d.target.clone()).map(|target| view! {
                <div class="counter-visualization__target" style="color: #888;">
                    "(" {target} ")"
                </div>
            })}
            <div class="counter-visualization__label" style="color: #666;">{label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::visualization::{ColumnDataType, QueryColumn};
    use serde_json::json;

    fn data(rows: Value) -> VisualizationData {
        VisualizationData {
            columns: vec![QueryColumn::new("counter", ColumnDataType::Integer)],
            rows: serde_json::from_value::<Vec<Row>>(rows)
                .unwrap()
                .into_iter()
                .map(Arc::new)
                .collect(),
        }
    }

    #[test]
    fn test_get_options_defaults() {
        let options = get_options(&Value::Null, &QueryResultData::default()).unwrap();
        assert_eq!(options["counterColName"], "counter");
        assert_eq!(options["rowNumber"], 1);

        let err = get_options(&json!("bad"), &QueryResultData::default()).unwrap_err();
        assert!(matches!(err, VisualizationError::InvalidOptions { .. }));
    }

    #[test]
    fn test_format_counter() {
        let options = CounterOptions {
            string_decimal: 1,
            string_prefix: "$".into(),
            string_suffix: " total".into(),
            ..Default::default()
        };
        assert_eq!(format_counter(&json!(12345.67), &options), "$12 345.7 total");
        assert_eq!(format_counter(&json!("n/a"), &options), "$n/a total");
        assert_eq!(format_counter(&Value::Null, &options), "");
    }

    #[test]
    fn test_counter_display_with_target() {
        let options = CounterOptions {
            target_col_name: Some("counter".into()),
            target_row_number: 2,
            ..Default::default()
        };
        let display = counter_display(&data(json!([{"counter": 10}, {"counter": 7}])), &options);
        assert_eq!(display.value, "10");
        assert_eq!(display.target.as_deref(), Some("7"));
        assert_eq!(display.trend, Some(Ordering::Greater));
    }

    #[test]
    fn test_counter_display_missing_row() {
        let options = CounterOptions {
            row_number: 5,
            ..Default::default()
        };
        let display = counter_display(&data(json!([{"counter": 10}])), &options);
        assert_eq!(display.value, "");
        assert_eq!(display.target, None);
        assert_eq!(display.trend, None);
    }
}
