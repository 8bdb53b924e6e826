use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use pagebus_error::HandlerError;
use serde_json::Value;
use tracing::warn;

/// Обработчик события.
///
/// Получает payload по ссылке. `Err` и паника считаются сбоем обработчика:
/// реестр пишет их в лог и продолжает доставку следующим подписчикам.
pub type Handler = Arc<dyn Fn(&Value) -> Result<(), HandlerError> + Send + Sync>;

/// Вызывает один обработчик, изолируя его сбой.
///
/// Паника перехватывается через `catch_unwind` и превращается в
/// [`HandlerError::Panicked`].
pub(crate) fn invoke(
    event: &str,
    handler: &Handler,
    payload: &Value,
) -> Result<(), HandlerError> {
    match panic::catch_unwind(AssertUnwindSafe(|| handler(payload))) {
        Ok(result) => result,
        Err(panic) => {
            warn!(event, "Event handler panicked");
            Err(HandlerError::from_panic(panic.as_ref()))
        }
    }
}
