//! Процессный экземпляр реестра.
//!
//! Основной способ: передавать [`SharedRegistry`] явно. Для модулей,
//! которые нельзя связать явно (загружаются позже и независимо), реестр
//! можно один раз установить в процессную ячейку и достать оттуда.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use pagebus_error::RegistryError;
use tracing::info;

use crate::{Registry, SharedRegistry};

static GLOBAL: OnceCell<SharedRegistry> = OnceCell::new();

/// Устанавливает процессный реестр. Повторная установка возвращает ошибку.
pub fn install(registry: SharedRegistry) -> Result<(), RegistryError> {
    GLOBAL
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInstalled)?;
    info!("Global event registry installed");
    Ok(())
}

/// Возвращает установленный реестр.
pub fn get() -> Result<SharedRegistry, RegistryError> {
    GLOBAL.get().cloned().ok_or(RegistryError::NotInstalled)
}

/// Возвращает установленный реестр или создаёт реестр с seed по умолчанию.
pub fn get_or_init() -> SharedRegistry {
    GLOBAL.get_or_init(|| Arc::new(Registry::new())).clone()
}

pub fn is_installed() -> bool {
    GLOBAL.get().is_some()
}
