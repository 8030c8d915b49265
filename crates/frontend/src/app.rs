use contracts::shared::visualization::{
    ColumnDataType, Filter, FilterValue, QueryColumn, QueryResult, RenderContext, Visualization,
    COUNTER, TABLE,
};
use leptos::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::shared::visualizations::VisualizationRenderer;

const SAMPLE_QUERY_RESULT: &str = include_str!("../../../demos/sample_query_result.json");
const REGION_FILTER: &str = "region::filter";

fn load_sample() -> QueryResult {
    serde_json::from_str(SAMPLE_QUERY_RESULT).unwrap_or_else(|e| {
        log::error!("failed to parse sample query result: {}", e);
        QueryResult::default()
    })
}

/// Dashboard-level selection of the region filter
fn region_filter(region: &str) -> Filter {
    Filter {
        name: REGION_FILTER.to_string(),
        friendly_name: "Region".to_string(),
        column: QueryColumn::new(REGION_FILTER, ColumnDataType::String),
        values: Vec::new(),
        current: FilterValue::Single(Value::String(region.to_string())),
        multiple: false,
    }
}

fn table_visualization() -> Visualization {
    Visualization {
        id: 1,
        kind: TABLE.to_string(),
        name: "Customers".to_string(),
        description: None,
        options: json!({
            "itemsPerPage": 5,
            "columns": [
                {"name": "name", "title": "Name", "allowSearch": true, "fixed": "left"},
                {"name": "city", "title": "City", "allowSearch": true},
                {"name": "amount", "title": "Amount", "numberFormatDecimals": 2},
                {"name": "created_at", "title": "Created", "dateTimeFormat": "%d.%m.%Y"},
                {"name": "region::filter", "visible": false}
            ]
        }),
    }
}

fn counter_visualization() -> Visualization {
    Visualization {
        id: 2,
        kind: COUNTER.to_string(),
        name: "Orders of the first customer".to_string(),
        description: None,
        options: json!({"counterColName": "orders", "stringSuffix": " orders"}),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let query_result = RwSignal::new(Arc::new(load_sample()));
    let global_filters = RwSignal::new(Vec::<Filter>::new());
    let table = RwSignal::new(table_visualization());
    let counter = RwSignal::new(counter_visualization());

    let on_region_change = move |ev: web_sys::Event| {
        let region = event_target_value(&ev);
        if region.is_empty() {
            global_filters.set(Vec::new());
        } else {
            global_filters.set(vec![region_filter(&region)]);
        }
    };

    view! {
        <div class="app" style="padding: 16px; display: flex; flex-direction: column; gap: 24px;">
            <div class="dashboard-filters" style="display: flex; align-items: center; gap: 8px;">
                <span>"Регион (дашборд):"</span>
                <select on:change=on_region_change>
                    <option value="">"Все"</option>
                    <option value="US">"US"</option>
                    <option value="EU">"EU"</option>
                    <option value="APAC">"APAC"</option>
                </select>
                <button on:click=move |_| query_result.set(Arc::new(load_sample()))>
                    "Обновить результат"
                </button>
            </div>
            <VisualizationRenderer
                visualization=table
                query_result=query_result
                filters=global_filters
                show_filters=true
                context=RenderContext::Query
            />
            <div style="max-width: 320px;">
                <VisualizationRenderer
                    visualization=counter
                    query_result=query_result
                    filters=global_filters
                    context=RenderContext::Widget
                />
            </div>
        </div>
    }
}
