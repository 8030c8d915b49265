//! Визуализации результатов запросов: таблица, счётчик и их общий конвейер

pub mod controller;
pub mod counter;
pub mod dimensions;
pub mod error;
pub mod filters;
pub mod options_cache;
pub mod query_result_data;
pub mod registry;
pub mod render_boundary;
pub mod table;
pub mod ui;

pub use error::VisualizationError;
pub use ui::renderer::VisualizationRenderer;
