use super::error::VisualizationError;

/// Сообщение вместо визуализации, отрисовка которой упала
pub const RENDER_ERROR_MESSAGE: &str = "Error while rendering visualization.";

/// Изоляция ошибок отрисовки
///
/// После ошибки показывается заглушка, пока `reset` (новые настройки или
/// данные) не даст визуализации ещё одну попытку.
#[derive(Debug, Default)]
pub struct RenderBoundary {
    failure: Option<VisualizationError>,
}

impl RenderBoundary {
    /// Вызывает `render`, если нет прошлой ошибки; `None` означает заглушку
    pub fn render<T>(
        &mut self,
        render: impl FnOnce() -> Result<T, VisualizationError>,
    ) -> Option<T> {
        if self.failure.is_some() {
            return None;
        }
        match render() {
            Ok(view) => Some(view),
            Err(err) => {
                log::error!("{}: {}", RENDER_ERROR_MESSAGE, err);
                self.failure = Some(err);
                None
            }
        }
    }

    /// Сбрасывает ошибку, `true` если она была
    pub fn reset(&mut self) -> bool {
        let had_failure = self.failure.take().is_some();
        if had_failure {
            log::debug!("render boundary reset");
        }
        had_failure
    }

    /// Текущая ошибка, выводится как подробности заглушки
    pub fn failure(&self) -> Option<&VisualizationError> {
        self.failure.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken() -> Result<&'static str, VisualizationError> {
        Err(VisualizationError::render("TABLE", "bad column"))
    }

    #[test]
    fn test_success_passes_through() {
        let mut boundary = RenderBoundary::default();
        assert_eq!(boundary.render(|| Ok("view")), Some("view"));
        assert!(boundary.failure().is_none());
    }

    #[test]
    fn test_failure_is_retained_until_reset() {
        let mut boundary = RenderBoundary::default();
        assert_eq!(boundary.render(broken), None);
        assert_eq!(
            boundary.failure(),
            Some(&VisualizationError::render("TABLE", "bad column"))
        );

        // после ошибки повторной отрисовки нет
        let mut called = false;
        assert_eq!(
            boundary.render(|| {
                called = true;
                Ok("view")
            }),
            None
        );
        assert!(!called);

        assert!(boundary.reset());
        assert_eq!(boundary.render(|| Ok("view")), Some("view"));
        assert!(!boundary.reset());
    }
}
