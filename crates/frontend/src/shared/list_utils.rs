/// Утилиты для списков: поле поиска с debounce и индикатор сортировки
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::visualizations::table::order_by::SortDirection;

/// Задержка перед применением поискового запроса
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Компонент поиска с debounce, кнопкой очистки и подсказкой
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (после debounce)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
    /// Текст подсказки для иконки info
    info: Option<String>,
) -> impl IntoView {
    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Таймер отменяется при замене или удалении
    let debounce = StoredValue::new_local(None::<Timeout>);

    // Внешний сброс (например, смена колонок) очищает поле
    Effect::new(move |_| {
        if value.get().is_empty() {
            debounce.set_value(None);
            set_input_value.set(String::new());
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        debounce.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="table-visualization-search" style="position: relative; display: inline-flex; align-items: center; gap: 6px;">
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; font-weight: normal; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
                on:click=|ev| ev.stop_propagation()
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button
                    style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        clear_filter(ev);
                    }
                    title="Очистить"
                >
                    {icon("x")}
                </button>
            })}
            {info.map(|text| view! {
                <span class="table-visualization-search-info" title=text style="display: inline-flex; color: #999; cursor: help;">
                    {icon("info")}
                </span>
            })}
        </div>
    }
}

/// Индикатор сортировки для заголовка
pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

/// CSS-класс индикатора сортировки
pub fn sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "sort-icon sort-icon--active"
    } else {
        "sort-icon"
    }
}
