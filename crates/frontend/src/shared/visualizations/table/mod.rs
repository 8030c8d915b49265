//! Sortable, searchable, paginated table visualization

pub mod cells;
pub mod columns;
pub mod options;
pub mod order_by;
pub mod rows;
pub mod search;
pub mod state;
pub mod ui;

use contracts::shared::visualization::TABLE;

use super::registry::VisualizationKind;

pub const KIND: VisualizationKind = VisualizationKind {
    kind: TABLE,
    name: "Table",
    get_options: options::get_options,
    render: ui::render,
};
