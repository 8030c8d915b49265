//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Сумма"
//!     description=None
//!     sort_direction=Signal::derive(move || Some(SortDirection::Ascending))
//!     sort_index=Signal::derive(|| None)
//!     on_sort=Some(Callback::new(move |_| toggle_sort()))
//!     align="right"
//!     style=String::new()
//!     widget=None
//! />
//! ```

use crate::shared::list_utils::{sort_class, sort_indicator};
use crate::shared::visualizations::table::order_by::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// - Индикатор сортировки (▲▼) и номер ключа при сортировке по нескольким колонкам
/// - Клик меняет сортировку, если колонка сортируемая
/// - Опционально содержит поле поиска над заголовком
/// - Сортировка приходит сигналами, ячейка не пересоздаётся при её смене
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Подсказка к заголовку
    description: Option<String>,

    /// Направление, если колонка участвует в сортировке
    #[prop(into)]
    sort_direction: Signal<Option<SortDirection>>,

    /// Номер ключа сортировки (1..), только для нескольких ключей
    #[prop(into)]
    sort_index: Signal<Option<usize>>,

    /// Callback при клике на заголовок; нет у несортируемых колонок
    on_sort: Option<Callback<()>>,

    /// Выравнивание заголовка (left/center/right)
    #[prop(optional, default = "left")]
    align: &'static str,

    /// Дополнительный стиль ячейки (закрепление колонки)
    #[prop(optional, into)]
    style: String,

    /// Виджет в заголовке (поле поиска)
    widget: Option<ViewFn>,
) -> impl IntoView {
    let sortable = on_sort.is_some();

    let handle_click = move |_| {
        if let Some(on_sort) = on_sort {
            on_sort.run(());
        }
    };

    let justify = match align {
        "right" => "flex-end",
        "center" => "center",
        _ => "flex-start",
    };
    let header_style = format!(
        "cursor: {}; user-select: none; display: flex; align-items: center; gap: 4px; justify-content: {};",
        if sortable { "pointer" } else { "default" },
        justify
    );

    view! {
        <TableHeaderCell attr:style=style>
            <div style="display: flex; flex-direction: column; gap: 6px;">
                {widget.map(|widget| widget.run())}
                <div
                    class="table__sortable-header"
                    style=header_style
                    title=description
                    on:click=handle_click
                >
                    {label}
                    {sortable.then(|| view! {
                        <span class=move || sort_class(sort_direction.get())>
                            {move || sort_indicator(sort_direction.get())}
                            {move || sort_index.get().map(|index| view! { <sup>{index}</sup> })}
                        </span>
                    })}
                </div>
            </div>
        </TableHeaderCell>
    }
}
