use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - first/prev/next/last buttons with page info
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Compact controls (dashboard widgets)
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let class = if compact {
        "pagination-controls pagination-controls--small"
    } else {
        "pagination-controls"
    };

    view! {
        <div class=class>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    if compact {
                        format!("{} / {}", page + 1, total)
                    } else {
                        format!("{} / {} ({})", page + 1, total, total_count.get())
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
