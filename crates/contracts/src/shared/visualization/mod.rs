//! DTO визуализаций: результат запроса, фильтры, настройки отображения

pub mod filter;
pub mod options;
pub mod query_result;
pub mod visualization;

pub use filter::*;
pub use options::*;
pub use query_result::*;
pub use visualization::*;
