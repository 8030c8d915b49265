use serde_json::Value;
use std::sync::Arc;

/// Последние вычисленные настройки.
///
/// Равные по содержимому настройки возвращают прежний `Arc`: отрисовка,
/// сравнивающая по указателю (например, сброс страницы таблицы), видит
/// только реальные изменения.
#[derive(Debug, Default)]
pub struct OptionsCache {
    last: Option<Arc<Value>>,
}

impl OptionsCache {
    pub fn intern(&mut self, options: Value) -> Arc<Value> {
        if let Some(last) = &self.last {
            if **last == options {
                return Arc::clone(last);
            }
        }
        log::debug!("visualization options changed");
        let options = Arc::new(options);
        self.last = Some(Arc::clone(&options));
        options
    }
}
