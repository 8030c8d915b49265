//! Render-ready column descriptors with sort and search metadata

use contracts::shared::visualization::TableColumnOptions;
use std::sync::Arc;

use super::order_by::{OrderBy, SortDirection};

pub type OrderChangeHandler = Arc<dyn Fn(OrderBy) + Send + Sync>;
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;
/// Current order, read at click time
pub type OrderSource = Arc<dyn Fn() -> OrderBy + Send + Sync>;

/// Header descriptor, built once per options; sort state is looked up separately
pub struct TableColumn<W> {
    pub options: TableColumnOptions,
    /// Search input hosted in this column's header
    pub search_widget: Option<W>,
    /// Computes the next order and hands it to the order change handler;
    /// absent for columns with `allowSort` off
    pub on_click: Option<ClickHandler>,
}

/// Direction and 1-based key position of a column; the position is shown
/// only for multi-key orders
pub fn sort_metadata(order_by: &OrderBy, column: &str) -> (Option<SortDirection>, Option<usize>) {
    let position = order_by.position(column);
    (
        position.map(|(_, direction)| direction),
        position
            .filter(|_| order_by.len() > 1)
            .map(|(index, _)| index + 1),
    )
}

/// Visible columns ordered by `order`
pub fn visible_columns(columns: &[TableColumnOptions]) -> Vec<TableColumnOptions> {
    let mut visible: Vec<_> = columns.iter().filter(|c| c.visible).cloned().collect();
    visible.sort_by_key(|c| c.order);
    visible
}

/// Builds header descriptors for the visible columns.
///
/// The search widget lands in the first searchable column, or in the first
/// column when none of the visible ones is searchable. Order changes do not
/// require rebuilding the descriptors.
pub fn prepare_columns<W>(
    columns: &[TableColumnOptions],
    search_widget: Option<W>,
    current_order: OrderSource,
    on_order_change: OrderChangeHandler,
) -> Vec<TableColumn<W>> {
    let visible = visible_columns(columns);
    let host = visible.iter().position(|c| c.allow_search).unwrap_or(0);
    let mut search_widget = search_widget;

    visible
        .into_iter()
        .enumerate()
        .map(|(index, options)| {
            let on_click = options.allow_sort.then(|| {
                let column = options.name.clone();
                let current_order = Arc::clone(&current_order);
                let on_order_change = Arc::clone(&on_order_change);
                Arc::new(move || on_order_change(current_order().toggle(&column))) as ClickHandler
            });

            TableColumn {
                search_widget: if index == host { search_widget.take() } else { None },
                on_click,
                options,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn option(name: &str, order: usize, allow_search: bool) -> TableColumnOptions {
        TableColumnOptions {
            name: name.to_string(),
            title: name.to_uppercase(),
            order,
            allow_search,
            ..Default::default()
        }
    }

    fn fixed(order: OrderBy) -> OrderSource {
        Arc::new(move || order.clone())
    }

    fn noop() -> OrderChangeHandler {
        Arc::new(|_| {})
    }

    #[test]
    fn test_visible_sorted_by_order() {
        let mut hidden = option("hidden", 0, false);
        hidden.visible = false;
        let columns = vec![option("b", 2, false), hidden, option("a", 1, false)];

        let prepared = prepare_columns::<()>(&columns, None, fixed(OrderBy::default()), noop());
        let names: Vec<_> = prepared.iter().map(|c| c.options.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_search_widget_in_first_searchable_column() {
        let columns = vec![option("a", 0, false), option("b", 1, true), option("c", 2, true)];
        let prepared = prepare_columns(&columns, Some("search"), fixed(OrderBy::default()), noop());
        let hosts: Vec<_> = prepared.iter().map(|c| c.search_widget).collect();
        assert_eq!(hosts, vec![None, Some("search"), None]);

        let columns = vec![option("a", 0, false), option("b", 1, false)];
        let prepared = prepare_columns(&columns, Some("search"), fixed(OrderBy::default()), noop());
        assert_eq!(prepared[0].search_widget, Some("search"));
    }

    #[test]
    fn test_sort_metadata() {
        let single = OrderBy::default().toggle("b");
        assert_eq!(sort_metadata(&single, "b"), (Some(SortDirection::Ascending), None));
        assert_eq!(sort_metadata(&single, "a"), (None, None));

        let multi = single.toggle("c");
        assert_eq!(sort_metadata(&multi, "c"), (Some(SortDirection::Ascending), Some(1)));
        assert_eq!(sort_metadata(&multi, "b"), (Some(SortDirection::Ascending), Some(2)));
        assert_eq!(sort_metadata(&multi, "a"), (None, None));
    }

    #[test]
    fn test_click_emits_next_order() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        let handler: OrderChangeHandler = Arc::new(move |order| sink.lock().unwrap().push(order));

        let mut columns = vec![option("a", 0, false), option("b", 1, false)];
        columns[1].allow_sort = false;
        let current = OrderBy::default().toggle("a");
        let prepared = prepare_columns::<()>(&columns, None, fixed(current.clone()), handler);

        assert!(prepared[1].on_click.is_none());
        if let Some(click) = &prepared[0].on_click {
            click();
        }
        let received = received.lock().unwrap();
        assert_eq!(received.as_slice(), &[current.toggle("a")]);
        assert_eq!(received[0].position("a"), Some((0, SortDirection::Descending)));
    }

    #[test]
    fn test_descriptors_follow_order_changes() {
        let order = Arc::new(Mutex::new(OrderBy::default()));
        let source = Arc::clone(&order);
        let sink = Arc::clone(&order);
        let prepared = prepare_columns(
            &[option("a", 0, true), option("b", 1, false)],
            Some("search"),
            Arc::new(move || source.lock().unwrap().clone()),
            Arc::new(move |next: OrderBy| *sink.lock().unwrap() = next),
        );

        let click_a = prepared[0].on_click.clone().unwrap();
        let click_b = prepared[1].on_click.clone().unwrap();
        click_a();
        click_a();
        assert_eq!(order.lock().unwrap().position("a"), Some((0, SortDirection::Descending)));

        click_b();
        let current = order.lock().unwrap().clone();
        assert_eq!(sort_metadata(&current, "b"), (Some(SortDirection::Ascending), Some(1)));
        assert_eq!(sort_metadata(&current, "a"), (Some(SortDirection::Descending), Some(2)));
        assert_eq!(prepared[0].search_widget, Some("search"));
    }
}
