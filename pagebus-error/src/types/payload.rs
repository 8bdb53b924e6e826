use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки типизированных операций над payload и значениями shared store.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Не удалось превратить значение в JSON.
    #[error("failed to serialize payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// JSON не соответствует ожидаемому типу.
    #[error("failed to deserialize {target}: {source}")]
    Deserialize {
        target: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PayloadError {
    pub fn deserialize(
        target: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::Deserialize {
            target: target.into(),
            source,
        }
    }
}

/// Для `?` в коде сериализации; ошибки разбора строятся через
/// [`PayloadError::deserialize`], чтобы указать цель.
impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

impl ErrorExt for PayloadError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Serialize(_) => StatusCode::SerializationFailed,
            Self::Deserialize { .. } => StatusCode::DeserializationFailed,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
