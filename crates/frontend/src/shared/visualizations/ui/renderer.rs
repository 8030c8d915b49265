//! Композиционный корень визуализации
//!
//! результат запроса -> датасет -> локальные фильтры -> строки -> визуализация,
//! с размером контейнера и изоляцией ошибок отрисовки.

use contracts::shared::visualization::{Filter, QueryResult, RenderContext, Visualization};
use leptos::html::Div;
use leptos::prelude::*;
use serde_json::Value;
use std::sync::Arc;

use super::error_message::ErrorMessage;
use super::filter_controls::Filters;
use crate::shared::visualizations::controller::VisualizationController;
use crate::shared::visualizations::dimensions::use_dimensions;
use crate::shared::visualizations::error::VisualizationError;
use crate::shared::visualizations::options_cache::OptionsCache;
use crate::shared::visualizations::registry::{registry, resolve_options, RendererProps};
use crate::shared::visualizations::render_boundary::{RenderBoundary, RENDER_ERROR_MESSAGE};

/// Готовые настройки для визуализации `kind`
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub kind: &'static str,
    pub options: Arc<Value>,
}

#[component]
pub fn VisualizationRenderer(
    /// Тип, название и сохранённые настройки
    #[prop(into)]
    visualization: Signal<Visualization>,
    /// Загруженный результат; новый `Arc` означает новый результат
    #[prop(into)]
    query_result: Signal<Arc<QueryResult>>,
    /// Глобальные фильтры дашборда
    #[prop(into)]
    filters: Signal<Vec<Filter>>,
    /// Показывать селекторы локальных фильтров
    #[prop(optional)]
    show_filters: bool,
    #[prop(optional)]
    context: RenderContext,
) -> impl IntoView {
    let controller = RwSignal::new(VisualizationController::new(
        query_result.get_untracked(),
        &filters.get_untracked(),
    ));

    // Новый результат запроса: фильтры датасета + текущие глобальные
    Effect::new(move |_| {
        let query_result = query_result.get();
        let globals = filters.get_untracked();
        controller.maybe_update(|c| c.on_query_result(query_result, &globals));
    });

    // Изменились только глобальные фильтры: текущие локальные + новые глобальные
    Effect::new(move |_| {
        filters.with(|globals| controller.maybe_update(|c| c.on_global_filters(globals)));
    });

    let dataset = Memo::new(move |_| controller.with(|c| Arc::clone(c.data())));
    let local_filters = Memo::new(move |_| controller.with(|c| c.filters().to_vec()));
    let filtered_data = Memo::new(move |_| controller.with(|c| c.filtered_data()));

    let options_cache = StoredValue::new(OptionsCache::default());
    let options = Memo::new(move |_| -> Result<ResolvedOptions, VisualizationError> {
        let kind = visualization.with(|v| registry().get(&v.kind).copied())?;
        let resolved = visualization
            .with(|v| dataset.with(|data| resolve_options(&kind, v, data, context)))?;
        let options = options_cache
            .try_update_value(|cache| cache.intern(resolved))
            .ok_or_else(|| VisualizationError::render(kind.kind, "visualization disposed"))?;
        Ok(ResolvedOptions {
            kind: kind.kind,
            options,
        })
    });

    // Новые настройки или данные: снова пробуем отрисовать
    let boundary = RwSignal::new(RenderBoundary::default());
    Effect::new(move |_| {
        options.track();
        filtered_data.track();
        boundary.maybe_update(|b| b.reset());
    });

    let container = NodeRef::<Div>::new();
    let size = use_dimensions(container);

    let content = move || {
        boundary.track();
        let rendered = boundary
            .try_update_untracked(|b| {
                b.render(|| {
                    let resolved = options.get()?;
                    let kind = registry().get(resolved.kind)?;
                    (kind.render)(RendererProps {
                        options: resolved.options,
                        data: filtered_data.into(),
                        size: size.into(),
                        visualization_name: visualization.with(|v| v.name.clone()),
                    })
                })
            })
            .flatten();

        rendered.unwrap_or_else(|| {
            let details = boundary.with_untracked(|b| b.failure().map(ToString::to_string));
            view! { <ErrorMessage message=RENDER_ERROR_MESSAGE details=details /> }.into_any()
        })
    };

    let on_filters_change = Callback::new(move |next: Vec<Filter>| {
        controller.maybe_update(|c| c.set_filters(next));
    });

    view! {
        <div class="visualization-renderer">
            {show_filters.then(|| view! {
                <Show when=move || local_filters.with(|f| !f.is_empty())>
                    <Filters filters=local_filters on_change=on_filters_change />
                </Show>
            })}
            <div class="visualization-renderer-wrapper" node_ref=container style="width: 100%;">
                {content}
            </div>
        </div>
    }
}
