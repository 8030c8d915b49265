//! Реестр типов визуализаций: тип -> (настройки, отрисовка)

use contracts::shared::visualization::{RenderContext, Visualization, TABLE};
use leptos::prelude::*;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use super::dimensions::Size;
use super::error::VisualizationError;
use super::query_result_data::{QueryResultData, VisualizationData};
use super::{counter, table};

/// Всё, что получает конкретная визуализация
pub struct RendererProps {
    /// Итоговые настройки; тот же `Arc`, пока содержимое не изменилось
    pub options: Arc<Value>,
    /// Колонки и отфильтрованные строки
    pub data: Signal<VisualizationData>,
    pub size: Signal<Size>,
    pub visualization_name: String,
}

/// Дополняет сохранённые настройки значениями по умолчанию по полному датасету
pub type OptionsResolver = fn(&Value, &QueryResultData) -> Result<Value, VisualizationError>;
pub type RenderFn = fn(RendererProps) -> Result<AnyView, VisualizationError>;

/// Зарегистрированный тип визуализации
#[derive(Clone, Copy)]
pub struct VisualizationKind {
    /// Тег типа, например "TABLE"
    pub kind: &'static str,
    /// Отображаемое название
    pub name: &'static str,
    pub get_options: OptionsResolver,
    pub render: RenderFn,
}

#[derive(Default)]
pub struct VisualizationRegistry {
    kinds: HashMap<&'static str, VisualizationKind>,
}

impl VisualizationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: VisualizationKind) {
        self.kinds.insert(kind.kind, kind);
    }

    pub fn get(&self, kind: &str) -> Result<&VisualizationKind, VisualizationError> {
        self.kinds.get(kind).ok_or_else(|| {
            log::warn!(
                "visualization type is not registered: {} (known: {})",
                kind,
                self.kinds().join(", ")
            );
            VisualizationError::UnknownType(kind.to_string())
        })
    }

    /// Зарегистрированные теги, по алфавиту
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.kinds.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }
}

static REGISTRY: Lazy<VisualizationRegistry> = Lazy::new(|| {
    let mut registry = VisualizationRegistry::new();
    registry.register(table::KIND);
    registry.register(counter::KIND);
    registry
});

/// Реестр со всеми встроенными типами
pub fn registry() -> &'static VisualizationRegistry {
    &REGISTRY
}

/// Настройки `visualization` для отрисовки в `context`.
///
/// В виджетах дашборда пагинация таблицы компактная.
pub fn resolve_options(
    kind: &VisualizationKind,
    visualization: &Visualization,
    data: &QueryResultData,
    context: RenderContext,
) -> Result<Value, VisualizationError> {
    let mut options = (kind.get_options)(&visualization.options, data)?;

    if kind.kind == TABLE {
        if let Value::Object(map) = &mut options {
            let pagination_size = match context {
                RenderContext::Widget => "small",
                RenderContext::Query => "default",
            };
            map.insert("paginationSize".to_string(), json!(pagination_size));
        }
    }

    Ok(options)
}
