use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type tag of the table visualization
pub const TABLE: &str = "TABLE";
/// Type tag of the counter visualization
pub const COUNTER: &str = "COUNTER";

/// Saved visualization of a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    pub id: i64,
    /// Type tag (e.g., "TABLE")
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw options as stored by the dashboard
    #[serde(default)]
    pub options: Value,
}

/// Where the visualization is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderContext {
    /// Query page
    #[default]
    Query,
    /// Dashboard widget
    Widget,
}
