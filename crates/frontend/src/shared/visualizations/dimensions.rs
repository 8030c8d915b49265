//! Отслеживание размеров контейнера визуализации

use leptos::html::Div;
use leptos::prelude::*;

/// Размер контейнера в px, нулевой до первого замера
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Принимает новый замер, `true` если размер изменился
    pub fn replace(&mut self, measured: Size) -> bool {
        if *self == measured {
            return false;
        }
        *self = measured;
        true
    }
}

/// Отслеживает размер `target`.
///
/// Замер после монтирования и на каждый resize окна.
/// Подписка на resize снимается вместе с компонентом.
pub fn use_dimensions(target: NodeRef<Div>) -> ReadSignal<Size> {
    let (size, set_size) = signal(Size::default());

    let measure = move || {
        let measured = target
            .get_untracked()
            .map(|el| Size::new(el.offset_width() as f64, el.offset_height() as f64))
            .unwrap_or_default();
        set_size.maybe_update(|current| current.replace(measured));
    };

    // Первый замер сразу после монтирования
    Effect::new(move |_| {
        if target.get().is_some() {
            measure();
        }
    });

    let handle = window_event_listener(leptos::ev::resize, move |_| measure());
    on_cleanup(move || handle.remove());

    size
}
