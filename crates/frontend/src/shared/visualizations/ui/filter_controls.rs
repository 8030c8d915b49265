//! Селекторы локальных фильтров визуализации

use contracts::shared::visualization::{Filter, FilterValue};
use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen::JsCast;

use crate::shared::visualizations::filters::{is_selected, with_selection};
use crate::shared::visualizations::query_result_data::value_to_string;

/// Новый выбор по выбранным позициям в `filter.values`
pub fn selection(filter: &Filter, indices: &[usize]) -> FilterValue {
    let mut values = indices.iter().filter_map(|&i| filter.values.get(i).cloned());
    if filter.multiple {
        FilterValue::Multiple(values.collect())
    } else {
        FilterValue::Single(values.next().unwrap_or(Value::Null))
    }
}

fn selected_indices(select: &web_sys::HtmlSelectElement) -> Vec<usize> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .filter_map(|option| option.value().parse().ok())
        .collect()
}

/// Селектор на каждый фильтр; изменение заменяет весь список локальных фильтров
#[component]
pub fn Filters(
    #[prop(into)] filters: Signal<Vec<Filter>>,
    on_change: Callback<Vec<Filter>>,
) -> impl IntoView {
    view! {
        <div class="filters-wrapper" style="display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 12px;">
            {move || {
                filters
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, filter)| {
                        let multiple = filter.multiple;
                        let friendly_name = filter.friendly_name.clone();
                        let options = filter
                            .values
                            .iter()
                            .enumerate()
                            .map(|(i, value)| {
                                let selected = is_selected(&filter, value);
                                view! {
                                    <option value=i.to_string() selected=selected>
                                        {value_to_string(value)}
                                    </option>
                                }
                            })
                            .collect_view();

                        let handle_change = move |ev: web_sys::Event| {
                            let select = event_target::<web_sys::HtmlSelectElement>(&ev);
                            let indices = selected_indices(&select);
                            let next = filters.with_untracked(|current| {
                                current
                                    .get(index)
                                    .map(|filter| with_selection(current, index, selection(filter, &indices)))
                            });
                            if let Some(next) = next {
                                on_change.run(next);
                            }
                        };

                        view! {
                            <label class="filter-control" style="display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                                <span>{friendly_name}</span>
                                <select
                                    multiple=multiple
                                    on:change=handle_change
                                    style="min-width: 160px; padding: 4px 6px; border: 1px solid #ddd; border-radius: 4px;"
                                >
                                    {options}
                                </select>
                            </label>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::visualization::{ColumnDataType, QueryColumn};
    use serde_json::json;

    fn filter(multiple: bool) -> Filter {
        Filter {
            name: "region::filter".into(),
            friendly_name: "Region".into(),
            column: QueryColumn::new("region::filter", ColumnDataType::String),
            values: vec![json!("US"), json!("EU"), json!("APAC")],
            current: FilterValue::Single(json!("US")),
            multiple,
        }
    }

    #[test]
    fn test_single_selection() {
        assert_eq!(selection(&filter(false), &[1]), FilterValue::Single(json!("EU")));
        assert_eq!(selection(&filter(false), &[]), FilterValue::Single(Value::Null));
    }

    #[test]
    fn test_multiple_selection_skips_unknown_positions() {
        assert_eq!(
            selection(&filter(true), &[0, 2, 7]),
            FilterValue::Multiple(vec![json!("US"), json!("APAC")])
        );
        assert_eq!(selection(&filter(true), &[]), FilterValue::Multiple(Vec::new()));
    }
}
