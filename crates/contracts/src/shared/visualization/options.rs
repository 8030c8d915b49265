use serde::{Deserialize, Serialize};

use super::query_result::ColumnDataType;

/// Default page size of the table visualization
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;
/// Default chrono format for datetime cells
pub const DEFAULT_DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Pagination control density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationSize {
    #[default]
    Default,
    Small,
}

/// How a cell value is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayAs {
    #[default]
    String,
    Number,
    Datetime,
    Boolean,
    Json,
}

impl DisplayAs {
    /// Default presentation for a column type
    pub fn for_type(data_type: ColumnDataType) -> Self {
        match data_type {
            ColumnDataType::Integer | ColumnDataType::Float => DisplayAs::Number,
            ColumnDataType::Boolean => DisplayAs::Boolean,
            ColumnDataType::Date | ColumnDataType::Datetime => DisplayAs::Datetime,
            ColumnDataType::String => DisplayAs::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayAs::String => "string",
            DisplayAs::Number => "number",
            DisplayAs::Datetime => "datetime",
            DisplayAs::Boolean => "boolean",
            DisplayAs::Json => "json",
        }
    }
}

/// Horizontal alignment of cell content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl ContentAlignment {
    pub fn for_type(data_type: ColumnDataType) -> Self {
        if data_type.is_numeric() {
            ContentAlignment::Right
        } else {
            ContentAlignment::Left
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentAlignment::Left => "left",
            ContentAlignment::Center => "center",
            ContentAlignment::Right => "right",
        }
    }
}

/// Pinning of a column while scrolling horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedAlignment {
    #[default]
    None,
    Left,
    Right,
}

/// Per-column settings of the table visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableColumnOptions {
    /// Dataset column name
    pub name: String,
    /// Header text
    pub title: String,
    /// Header tooltip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dataset column type
    #[serde(rename = "type")]
    pub data_type: ColumnDataType,
    pub display_as: DisplayAs,
    pub visible: bool,
    /// Sort key of the column position
    pub order: usize,
    pub allow_search: bool,
    pub allow_sort: bool,
    pub align_content: ContentAlignment,
    pub fixed: FixedAlignment,
    /// Fixed number of decimals for number cells
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format_decimals: Option<u8>,
    /// chrono format string for datetime cells
    pub date_time_format: String,
}

impl Default for TableColumnOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            description: None,
            data_type: ColumnDataType::String,
            display_as: DisplayAs::String,
            visible: true,
            order: 0,
            allow_search: false,
            allow_sort: true,
            align_content: ContentAlignment::Left,
            fixed: FixedAlignment::None,
            number_format_decimals: None,
            date_time_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

/// Options of the table visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    pub items_per_page: usize,
    pub pagination_size: PaginationSize,
    pub columns: Vec<TableColumnOptions>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            pagination_size: PaginationSize::Default,
            columns: Vec::new(),
        }
    }
}

/// Options of the counter visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterOptions {
    pub counter_label: String,
    /// Column holding the counter value
    pub counter_col_name: String,
    /// 1-based row of the counter value
    pub row_number: usize,
    /// Column holding the target value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_col_name: Option<String>,
    /// 1-based row of the target value
    pub target_row_number: usize,
    pub string_decimal: u8,
    pub string_prefix: String,
    pub string_suffix: String,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            counter_label: String::new(),
            counter_col_name: "counter".to_string(),
            row_number: 1,
            target_col_name: None,
            target_row_number: 1,
            string_decimal: 0,
            string_prefix: String::new(),
            string_suffix: String::new(),
        }
    }
}
