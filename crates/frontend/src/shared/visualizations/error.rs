use thiserror::Error;

/// Ошибки визуализаций
///
/// Clone + PartialEq: значения проходят через Memo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualizationError {
    #[error("unknown visualization type: {0}")]
    UnknownType(String),

    #[error("invalid {kind} options: {message}")]
    InvalidOptions { kind: String, message: String },

    #[error("failed to render {kind}: {message}")]
    Render { kind: String, message: String },
}

impl VisualizationError {
    pub fn invalid_options(kind: &str, message: impl ToString) -> Self {
        VisualizationError::InvalidOptions {
            kind: kind.to_string(),
            message: message.to_string(),
        }
    }

    pub fn render(kind: &str, message: impl ToString) -> Self {
        VisualizationError::Render {
            kind: kind.to_string(),
            message: message.to_string(),
        }
    }
}
