use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки загрузки настроек и инициализации логирования.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Источник настроек (env, defaults) не удалось прочитать.
    #[error("failed to load settings: {0}")]
    Load(String),

    /// Значение поля недопустимо.
    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    /// Глобальный subscriber уже установлен или фильтр некорректен.
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),
}

impl ConfigError {
    pub fn invalid(
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Load(_) | Self::Invalid { .. } => StatusCode::InvalidConfig,
            Self::LoggingInit(_) => StatusCode::LoggingInitFailed,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        let mut tags = vec![
            ("error_type", "config".to_string()),
            ("status_code", self.status_code().to_string()),
        ];
        if let Self::Invalid { field, .. } = self {
            tags.push(("field", field.to_string()));
        }
        tags
    }
}
