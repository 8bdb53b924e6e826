use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, PayloadError, StatusCode};

/// Сбой подписчика во время `publish`.
///
/// Единственный вид ошибки, который может возникнуть при доставке события.
/// Реестр перехватывает его, пишет в лог и продолжает рассылку остальным
/// подписчикам: до издателя ошибка не доходит.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// Обработчик вернул ошибку.
    #[error("handler failed: {0}")]
    Failed(String),

    /// Обработчик запаниковал; содержит текст паники, если он был строкой.
    #[error("handler panicked: {0}")]
    Panicked(String),

    /// Типизированный обработчик не смог разобрать payload.
    #[error("payload does not match the handler type: {0}")]
    Payload(String),
}

impl HandlerError {
    /// Короткий конструктор для `HandlerError::Failed`.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    /// Строит `Panicked` из значения, полученного от `catch_unwind`.
    pub fn from_panic(panic: &(dyn Any + Send)) -> Self {
        let reason = if let Some(s) = panic.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::Panicked(reason)
    }
}

impl From<PayloadError> for HandlerError {
    fn from(err: PayloadError) -> Self {
        Self::Payload(err.to_string())
    }
}

impl ErrorExt for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Failed(_) => StatusCode::HandlerFailed,
            Self::Panicked(_) => StatusCode::HandlerPanicked,
            Self::Payload(_) => StatusCode::PayloadMismatch,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("error_type", "event_handler".to_string()),
            ("status_code", self.status_code().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::panic;

    use super::*;

    /// Тест проверяет соответствие вариантов статус-кодам.
    #[test]
    fn test_status_codes() {
        assert_eq!(
            HandlerError::failed("x").status_code(),
            StatusCode::HandlerFailed
        );
        assert_eq!(
            HandlerError::Panicked("x".into()).status_code(),
            StatusCode::HandlerPanicked
        );
        assert_eq!(
            HandlerError::Payload("x".into()).status_code(),
            StatusCode::PayloadMismatch
        );
    }

    /// Тест проверяет извлечение текста паники из `&str` и `String`.
    #[test]
    fn test_from_panic_payloads() {
        let err = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(
            HandlerError::from_panic(err.as_ref()),
            HandlerError::Panicked("boom".into())
        );

        let n = 7;
        let err = panic::catch_unwind(|| panic!("boom {n}")).unwrap_err();
        assert_eq!(
            HandlerError::from_panic(err.as_ref()),
            HandlerError::Panicked("boom 7".into())
        );

        let err = panic::catch_unwind(|| panic::panic_any(42_u8)).unwrap_err();
        assert_eq!(
            HandlerError::from_panic(err.as_ref()),
            HandlerError::Panicked("non-string panic payload".into())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            HandlerError::failed("db offline").to_string(),
            "handler failed: db offline"
        );
    }

    /// Тест проверяет, что ошибки payload конвертируются в `Payload`.
    #[test]
    fn test_from_payload_error() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err: HandlerError = PayloadError::deserialize("event 'x'", source).into();
        assert!(matches!(err, HandlerError::Payload(ref m) if m.contains("event 'x'")));
    }
}
