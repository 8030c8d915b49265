//! Row pipeline of the table: init -> search -> sort -> page

use contracts::shared::visualization::{Row, TableColumnOptions};
use std::collections::HashMap;
use std::sync::Arc;

use super::cells::{coerce, compare_cells, format_cell, CellValue};
use super::order_by::OrderBy;

static NULL_CELL: CellValue = CellValue::Null;

/// Render-ready row. Filtering and sorting move rows around, cells are shared.
#[derive(Debug, Clone)]
pub struct PreparedRow {
    /// Stable key derived from the position in the dataset
    pub key: String,
    pub cells: Arc<HashMap<String, CellValue>>,
}

impl PreparedRow {
    pub fn cell(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&NULL_CELL)
    }
}

impl PartialEq for PreparedRow {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && Arc::ptr_eq(&self.cells, &other.cells)
    }
}

/// Coerces raw rows per column type and assigns keys `record{index}`
pub fn init_rows(rows: &[Arc<Row>], columns: &[TableColumnOptions]) -> Vec<PreparedRow> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let cells = columns
                .iter()
                .map(|column| {
                    let cell = row
                        .get(&column.name)
                        .map(|value| coerce(value, column.data_type))
                        .unwrap_or(CellValue::Null);
                    (column.name.clone(), cell)
                })
                .collect();
            PreparedRow {
                key: format!("record{}", index),
                cells: Arc::new(cells),
            }
        })
        .collect()
}

/// Keeps rows whose display text in any searchable column contains `term`,
/// ignoring case
pub fn filter_rows(
    rows: Vec<PreparedRow>,
    term: &str,
    search_columns: &[TableColumnOptions],
) -> Vec<PreparedRow> {
    if term.is_empty() || search_columns.is_empty() {
        return rows;
    }

    let term = term.to_uppercase();
    rows.into_iter()
        .filter(|row| {
            search_columns.iter().any(|column| {
                format_cell(row.cell(&column.name), column)
                    .to_uppercase()
                    .contains(&term)
            })
        })
        .collect()
}

/// Stable multi-key sort; an empty order keeps the input order
pub fn sort_rows(mut rows: Vec<PreparedRow>, order_by: &OrderBy) -> Vec<PreparedRow> {
    if order_by.is_empty() {
        return rows;
    }

    rows.sort_by(|a, b| {
        order_by
            .keys()
            .iter()
            .map(|key| {
                key.direction
                    .apply(compare_cells(a.cell(&key.column), b.cell(&key.column)))
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

/// Number of pages, at least one
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

/// Rows of the 0-based `page`; pages past the end are clamped to the last one
pub fn paginate(rows: &[PreparedRow], page: usize, per_page: usize) -> &[PreparedRow] {
    if per_page == 0 {
        return rows;
    }
    let page = page.min(page_count(rows.len(), per_page) - 1);
    let start = page * per_page;
    let end = (start + per_page).min(rows.len());
    &rows[start.min(end)..end]
}
