//! Table visualization component

use contracts::shared::visualization::{
    FixedAlignment, PaginationSize, TableColumnOptions, TableOptions, TABLE,
};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableRow};

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::list_utils::SearchInput;
use crate::shared::visualizations::dimensions::Size;
use crate::shared::visualizations::error::VisualizationError;
use crate::shared::visualizations::query_result_data::VisualizationData;
use crate::shared::visualizations::registry::RendererProps;

use super::cells::format_cell;
use super::columns::{
    prepare_columns, sort_metadata, visible_columns, OrderChangeHandler, OrderSource,
};
use super::rows::{filter_rows, init_rows, page_count, paginate, sort_rows};
use super::search::{search_columns, search_info, search_placeholder};
use super::state::TableState;

// Narrower tables start squeezing columns together
pub const MIN_SCROLL_WIDTH: f64 = 1200.0;
pub const MIN_SCROLL_HEIGHT: f64 = 500.0;

/// Scroll area (width, height): the measured container, but never below the minimum
pub fn scroll_area(size: Size) -> (f64, f64) {
    (
        size.width.max(MIN_SCROLL_WIDTH),
        size.height.max(MIN_SCROLL_HEIGHT),
    )
}

fn fixed_style(fixed: FixedAlignment, z_index: u8) -> String {
    let side = match fixed {
        FixedAlignment::None => return String::new(),
        FixedAlignment::Left => "left",
        FixedAlignment::Right => "right",
    };
    format!(
        "position: sticky; {}: 0; z-index: {}; background: var(--colorNeutralBackground1, #fff);",
        side, z_index
    )
}

fn cell_style(column: &TableColumnOptions) -> String {
    format!(
        "text-align: {}; {}",
        column.align_content.as_str(),
        fixed_style(column.fixed, 1)
    )
}

/// Header clicks may select text accidentally
fn clear_text_selection() {
    if let Some(selection) = web_sys::window().and_then(|w| w.get_selection().ok().flatten()) {
        let _ = selection.remove_all_ranges();
    }
}

pub fn render(props: RendererProps) -> Result<AnyView, VisualizationError> {
    let options: TableOptions = serde_json::from_value(props.options.as_ref().clone())
        .map_err(|e| VisualizationError::render(TABLE, e))?;

    Ok(view! { <TableRenderer options=options data=props.data size=props.size /> }.into_any())
}

#[component]
pub fn TableRenderer(
    options: TableOptions,
    #[prop(into)] data: Signal<VisualizationData>,
    #[prop(into)] size: Signal<Size>,
) -> impl IntoView {
    let items_per_page = options.items_per_page;
    let compact = options.pagination_size == PaginationSize::Small;
    let searchable = search_columns(&options.columns);
    let placeholder = search_placeholder(&searchable);
    let info = search_info(&searchable);

    let mut initial = TableState::default();
    data.with_untracked(|d| initial.sync_columns(&options.columns, &d.columns));
    let state = RwSignal::new(initial);

    let visible = StoredValue::new(visible_columns(&options.columns));
    let searchable = StoredValue::new(searchable);
    let options = StoredValue::new(options);

    // New data: back to the first page; new columns: drop search and order too
    Effect::new(move |prev: Option<()>| {
        let data_columns = data.with(|d| d.columns.clone());
        options.with_value(|o| {
            state.maybe_update(|s| {
                let reset = s.sync_columns(&o.columns, &data_columns);
                let paged = prev.is_some() && s.set_page(0);
                reset || paged
            });
        });
    });

    let search_term = Memo::new(move |_| state.with(|s| s.search_term.clone()));
    let order_by = Memo::new(move |_| state.with(|s| s.order_by.clone()));

    let prepared = Memo::new(move |_| {
        data.with(|d| options.with_value(|o| init_rows(&d.rows, &o.columns)))
    });
    let rows = Memo::new(move |_| {
        let term = search_term.get();
        let order = order_by.get();
        searchable.with_value(|columns| sort_rows(filter_rows(prepared.get(), &term, columns), &order))
    });
    let total_pages = Memo::new(move |_| rows.with(|r| page_count(r.len(), items_per_page)));
    let page = Memo::new(move |_| state.with(|s| s.page).min(total_pages.get() - 1));
    let page_rows = Memo::new(move |_| {
        rows.with(|r| paginate(r, page.get(), items_per_page).to_vec())
    });
    let has_rows = Memo::new(move |_| data.with(|d| !d.rows.is_empty()));

    let search_widget = StoredValue::new(placeholder.map(|placeholder| {
        ViewFn::from(move || {
            view! {
                <SearchInput
                    value=search_term
                    on_change=Callback::new(move |term: String| {
                        state.maybe_update(|s| s.set_search_term(term));
                    })
                    placeholder=placeholder.clone()
                    info=info.clone()
                />
            }
        })
    }));

    let on_order_change: OrderChangeHandler = Arc::new(move |next| {
        clear_text_selection();
        state.maybe_update(|s| s.set_order_by(next));
    });
    let on_order_change = StoredValue::new(on_order_change);

    let current_order: OrderSource = Arc::new(move || order_by.get_untracked());
    let current_order = StoredValue::new(current_order);

    // Built without tracking the order: the search input must survive header clicks
    let header = move || {
        let columns = options.with_value(|o| {
            prepare_columns(
                &o.columns,
                search_widget.get_value(),
                current_order.get_value(),
                on_order_change.get_value(),
            )
        });
        columns
            .into_iter()
            .map(|column| {
                let name = column.options.name.clone();
                let sort = Memo::new(move |_| order_by.with(|o| sort_metadata(o, &name)));
                let on_sort = column
                    .on_click
                    .map(|click| Callback::new(move |_: ()| click()));
                view! {
                    <SortableHeaderCell
                        label=column.options.title.clone()
                        description=column.options.description.clone()
                        sort_direction=Signal::derive(move || sort.get().0)
                        sort_index=Signal::derive(move || sort.get().1)
                        on_sort=on_sort
                        align=column.options.align_content.as_str()
                        style=fixed_style(column.options.fixed, 2)
                        widget=column.search_widget
                    />
                }
            })
            .collect_view()
    };

    let body = move || {
        visible.with_value(|columns| {
            page_rows
                .get()
                .into_iter()
                .map(|row| {
                    let cells = columns
                        .iter()
                        .map(|column| {
                            let text = format_cell(row.cell(&column.name), column);
                            view! {
                                <TableCell attr:style=cell_style(column)>
                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view();
                    view! { <TableRow>{cells}</TableRow> }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=move || has_rows.get()>
            <div class="table-visualization-container">
                <div style=move || format!("max-height: {}px; overflow: auto;", scroll_area(size.get()).1)>
                    <Table attr:style=move || format!("min-width: {}px;", scroll_area(size.get()).0)>
                        <TableHeader>
                            <TableRow>{header}</TableRow>
                        </TableHeader>
                        <TableBody>{body}</TableBody>
                    </Table>
                </div>
                <Show when=move || { total_pages.get() > 1 }>
                    <PaginationControls
                        current_page=page
                        total_pages=total_pages
                        total_count=Signal::derive(move || rows.with(Vec::len))
                        on_page_change=Callback::new(move |p| {
                            state.maybe_update(|s| s.set_page(p));
                        })
                        compact=compact
                    />
                </Show>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_area_minimum() {
        assert_eq!(scroll_area(Size::default()), (1200.0, 500.0));
        assert_eq!(scroll_area(Size::new(1600.0, 300.0)), (1600.0, 500.0));
        assert_eq!(scroll_area(Size::new(800.0, 900.0)), (1200.0, 900.0));
    }

    #[test]
    fn test_cell_style() {
        let column = TableColumnOptions {
            fixed: FixedAlignment::Left,
            ..Default::default()
        };
        let style = cell_style(&column);
        assert!(style.starts_with("text-align: left;"));
        assert!(style.contains("position: sticky; left: 0;"));
        assert_eq!(fixed_style(FixedAlignment::None, 1), "");
    }
}
