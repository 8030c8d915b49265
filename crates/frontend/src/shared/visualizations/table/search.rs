//! Search column aggregation for the search input placeholder and tooltip

use contracts::shared::visualization::TableColumnOptions;

/// Column titles listed in the placeholder before "and N others"
pub const SEARCH_COLUMNS_LIMIT: usize = 3;

/// Columns flagged with `allowSearch`, in option order
pub fn search_columns(columns: &[TableColumnOptions]) -> Vec<TableColumnOptions> {
    columns.iter().filter(|c| c.allow_search).cloned().collect()
}

fn describe(columns: &[TableColumnOptions], limit: usize) -> String {
    let titles: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
    let shown = &titles[..limit.min(titles.len())];
    let rest = titles.len() - shown.len();

    if rest > 0 {
        return format!("{} and {} others", shown.join(", "), rest);
    }
    match shown.split_last() {
        Some((last, init)) if !init.is_empty() => format!("{} and {}", init.join(", "), last),
        Some((last, _)) => last.to_string(),
        None => String::new(),
    }
}

/// "Search A, B, C and 2 others..."; none when nothing is searchable
pub fn search_placeholder(columns: &[TableColumnOptions]) -> Option<String> {
    if columns.is_empty() {
        return None;
    }
    Some(format!("Search {}...", describe(columns, SEARCH_COLUMNS_LIMIT)))
}

/// Full list of searched columns, only when the placeholder truncates it
pub fn search_info(columns: &[TableColumnOptions]) -> Option<String> {
    if columns.len() <= SEARCH_COLUMNS_LIMIT {
        return None;
    }
    Some(format!("Search {}", describe(columns, usize::MAX)))
}
