use std::{any::Any, error::Error};

use crate::StatusCode;

/// Расширение для ошибок библиотеки (object-safe).
///
/// Даёт статус-код, безопасное сообщение для вызывающего модуля и теги
/// для логов.
pub trait ErrorExt: Error + Send + Sync + 'static {
    /// Статус-код ошибки.
    ///
    /// По умолчанию возвращает [`StatusCode::Internal`].
    fn status_code(&self) -> StatusCode {
        StatusCode::Internal
    }

    /// Возвращает ошибку как [`Any`](std::any::Any),
    /// чтобы можно было выполнить downcast к конкретному типу.
    fn as_any(&self) -> &dyn Any;

    /// Безопасное сообщение для вызывающего кода.
    ///
    /// Для внутренних ошибок возвращает строку `"Internal error"`.
    fn client_message(&self) -> String {
        match self.status_code() {
            StatusCode::Internal => "Internal error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Набор тегов для систем наблюдаемости.
    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        let type_name = std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        vec![
            ("error_type", type_name.to_string()),
            ("status_code", self.status_code().to_string()),
        ]
    }
}
