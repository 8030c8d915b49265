//! Interactive state of one table instance

use contracts::shared::visualization::{QueryColumn, TableColumnOptions};

use super::order_by::OrderBy;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    pub search_term: String,
    pub order_by: OrderBy,
    /// 0-based page
    pub page: usize,
    columns: Vec<TableColumnOptions>,
    data_columns: Vec<QueryColumn>,
}

impl TableState {
    /// Remembers the current column sets. Any change in either of them drops
    /// the search term, the ordering and the page. Returns true on reset.
    pub fn sync_columns(
        &mut self,
        columns: &[TableColumnOptions],
        data_columns: &[QueryColumn],
    ) -> bool {
        if self.columns == columns && self.data_columns == data_columns {
            return false;
        }
        log::debug!("table columns changed, resetting search and order");
        self.columns = columns.to_vec();
        self.data_columns = data_columns.to_vec();
        self.search_term.clear();
        self.order_by = OrderBy::default();
        self.page = 0;
        true
    }

    pub fn set_search_term(&mut self, term: String) -> bool {
        if self.search_term == term {
            return false;
        }
        self.search_term = term;
        self.page = 0;
        true
    }

    pub fn set_order_by(&mut self, order_by: OrderBy) -> bool {
        if self.order_by == order_by {
            return false;
        }
        self.order_by = order_by;
        self.page = 0;
        true
    }

    pub fn set_page(&mut self, page: usize) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::visualization::ColumnDataType;

    fn option(name: &str) -> TableColumnOptions {
        TableColumnOptions {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn busy_state() -> TableState {
        let mut state = TableState::default();
        state.sync_columns(&[option("name")], &[QueryColumn::new("name", ColumnDataType::String)]);
        state.set_search_term("an".to_string());
        state.set_order_by(OrderBy::default().toggle("name"));
        state.set_page(2);
        state
    }

    #[test]
    fn test_same_columns_keep_state() {
        let mut state = busy_state();
        let changed = state.sync_columns(
            &[option("name")],
            &[QueryColumn::new("name", ColumnDataType::String)],
        );
        assert!(!changed);
        assert_eq!(state.search_term, "an");
        assert_eq!(state.order_by.len(), 1);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_option_columns_change_resets() {
        let mut state = busy_state();
        assert!(state.sync_columns(
            &[option("name"), option("age")],
            &[QueryColumn::new("name", ColumnDataType::String)],
        ));
        assert_eq!(state.search_term, "");
        assert!(state.order_by.is_empty());
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_data_columns_change_resets() {
        let mut state = busy_state();
        assert!(state.sync_columns(
            &[option("name")],
            &[QueryColumn::new("name", ColumnDataType::Integer)],
        ));
        assert_eq!(state.search_term, "");
        assert!(state.order_by.is_empty());
    }

    #[test]
    fn test_search_and_order_reset_page() {
        let mut state = busy_state();
        assert!(state.set_search_term("bo".to_string()));
        assert_eq!(state.page, 0);

        state.set_page(3);
        assert!(state.set_order_by(OrderBy::default().toggle("age")));
        assert_eq!(state.page, 0);
        assert!(!state.set_search_term("bo".to_string()));
    }
}
