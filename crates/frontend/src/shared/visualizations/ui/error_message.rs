use crate::shared::icons::icon;
use leptos::prelude::*;

/// Сообщение об ошибке вместо визуализации
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    /// Технические подробности во всплывающей подсказке
    details: Option<String>,
) -> impl IntoView {
    view! {
        <div
            class="visualization-error"
            role="alert"
            title=details
            style="display: flex; align-items: center; gap: 8px; padding: 12px 16px; border: 1px solid #f5c2c7; border-radius: 4px; background: #f8d7da; color: #842029;"
        >
            {icon("alert")}
            <span>{message}</span>
        </div>
    }
}
