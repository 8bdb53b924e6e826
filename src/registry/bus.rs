use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use dashmap::DashMap;
use pagebus_error::{ErrorExt, HandlerError, PayloadError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

use super::{handler, Handler, SharedStore};
use crate::{catalog::events, AppEvent, DataChanged, SeedData};

/// Реестр, разделяемый между модулями через `Arc`.
pub type SharedRegistry = Arc<Registry>;

/// Снимок счётчиков доставки.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Общее количество вызовов `publish` (включая события без подписчиков).
    pub publish_count: usize,
    /// Количество успешных вызовов обработчиков.
    pub delivered_count: usize,
    /// Количество сбоев обработчиков (ошибка или паника).
    pub failure_count: usize,
}

/// Реестр уведомлений и shared store.
///
/// - Таблица подписок: имя события → обработчики в порядке регистрации.
///   Записи создаются при первой подписке и никогда не удаляются.
/// - Shared store: строковый ключ → JSON-значение, предзаполненное из
///   [`SeedData`]. Запись только через [`Registry::set_value`].
///
/// Доставка синхронная, на потоке вызывающего. Список обработчиков
/// копируется один раз в начале `publish` (snapshot), и никакая блокировка
/// не удерживается во время вызовов: обработчик может публиковать,
/// подписываться и писать в store, но подписка, добавленная во время
/// рассылки, начнёт получать события только со следующего `publish`.
pub struct Registry {
    /// Имя события → обработчики
    handlers: DashMap<Arc<str>, Vec<Handler>>,
    /// Shared data
    store: SharedStore,
    publish_count: AtomicUsize,
    delivered_count: AtomicUsize,
    failure_count: AtomicUsize,
}

impl Registry {
    /// Создаёт реестр с seed по умолчанию.
    pub fn new() -> Self {
        Self::with_seed(SeedData::default())
    }

    /// Создаёт реестр с заданным начальным содержимым store.
    pub fn with_seed(seed: SeedData) -> Self {
        let registry = Self {
            handlers: DashMap::new(),
            store: SharedStore::from_seed(seed),
            publish_count: AtomicUsize::new(0),
            delivered_count: AtomicUsize::new(0),
            failure_count: AtomicUsize::new(0),
        };
        info!(
            seeded_keys = registry.store.len(),
            "Event registry initialized"
        );
        registry
    }

    /// Создаёт реестр и сразу оборачивает его в `Arc`.
    pub fn shared(seed: SeedData) -> SharedRegistry {
        Arc::new(Self::with_seed(seed))
    }

    // -------------------------------------------------------------------------
    // Подписки и доставка
    // -------------------------------------------------------------------------

    /// Регистрирует обработчик для события.
    ///
    /// Принимается любое имя. Один и тот же обработчик можно
    /// зарегистрировать несколько раз, он будет вызван столько же раз.
    pub fn subscribe<F>(
        &self,
        event: &str,
        handler: F,
    ) where
        F: Fn(&Value) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.subscribe_handler(event, Arc::new(handler));
    }

    /// Регистрирует уже упакованный обработчик (например, один `Arc` на
    /// несколько событий).
    pub fn subscribe_handler(
        &self,
        event: &str,
        handler: Handler,
    ) {
        let mut entry = self.handlers.entry(Arc::from(event)).or_default();
        entry.push(handler);
        debug!(event, handlers = entry.len(), "Handler subscribed");
    }

    /// Подписка на событие из каталога.
    pub fn subscribe_event<F>(
        &self,
        event: AppEvent,
        handler: F,
    ) where
        F: Fn(&Value) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.subscribe(event.as_str(), handler);
    }

    /// Подписка с типизированным payload.
    ///
    /// Payload, который не разбирается в `T`, считается сбоем обработчика
    /// ([`HandlerError::Payload`]) и обрабатывается как любой другой сбой.
    pub fn subscribe_typed<T, F>(
        &self,
        event: &str,
        handler: F,
    ) where
        T: DeserializeOwned + 'static,
        F: Fn(T) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        let target = format!("payload of '{event}'");
        self.subscribe(event, move |payload| {
            let typed = T::deserialize(payload)
                .map_err(|err| PayloadError::deserialize(target.as_str(), err))?;
            handler(typed)
        });
    }

    /// Публикует событие.
    ///
    /// Без подписчиков ничего не делает. Иначе вызывает каждый обработчик по
    /// порядку регистрации. Сбой одного обработчика логируется и не мешает
    /// остальным; издатель его не видит.
    pub fn publish(
        &self,
        event: &str,
        payload: &Value,
    ) {
        self.publish_count.fetch_add(1, Ordering::Relaxed);

        // Снимок списка: shard-блокировка отпускается до вызова обработчиков.
        let snapshot = self.handlers.get(event).map(|entry| entry.value().clone());
        let Some(snapshot) = snapshot else {
            debug!(event, "No subscribers, event dropped");
            return;
        };

        for handler in &snapshot {
            match handler::invoke(event, handler, payload) {
                Ok(()) => {
                    self.delivered_count.fetch_add(1, Ordering::Relaxed);
                }
                Err(err) => {
                    self.failure_count.fetch_add(1, Ordering::Relaxed);
                    error!(
                        event,
                        error = %err,
                        status_code = %err.status_code(),
                        "Error in event handler"
                    );
                }
            }
        }
    }

    /// Публикует событие из каталога.
    pub fn publish_event(
        &self,
        event: AppEvent,
        payload: &Value,
    ) {
        self.publish(event.as_str(), payload);
    }

    /// Сериализует `payload` в JSON и публикует его.
    ///
    /// Если сериализация не удалась, ничего не публикуется.
    pub fn publish_json<T: Serialize + ?Sized>(
        &self,
        event: &str,
        payload: &T,
    ) -> Result<(), PayloadError> {
        let value = serde_json::to_value(payload)?;
        self.publish(event, &value);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Shared store
    // -------------------------------------------------------------------------

    /// Перезаписывает (или создаёт) значение и публикует `data-changed` с
    /// payload `{"key": key, "value": value}`.
    pub fn set_value(
        &self,
        key: impl Into<String>,
        value: Value,
    ) {
        let key = key.into();
        self.store.insert(key.clone(), value.clone());
        debug!(key = %key, "Shared value updated");

        let change = DataChanged::new(key, value);
        self.publish(events::DATA_CHANGED, &change.to_value());
    }

    /// Типизированная запись: значение сериализуется в JSON.
    pub fn set_as<T: Serialize + ?Sized>(
        &self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), PayloadError> {
        let value = serde_json::to_value(value)?;
        self.set_value(key, value);
        Ok(())
    }

    /// Текущее значение ключа или `None`, если ключ ни разу не записывался.
    pub fn get_value(
        &self,
        key: &str,
    ) -> Option<Value> {
        self.store.get(key)
    }

    /// Типизированное чтение.
    ///
    /// `Ok(None)` для отсутствующего ключа, `Err` если значение не
    /// разбирается в `T`.
    pub fn get_as<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, PayloadError> {
        self.store
            .get(key)
            .map(|value| {
                serde_json::from_value(value)
                    .map_err(|err| PayloadError::deserialize(format!("key '{key}'"), err))
            })
            .transpose()
    }

    /// Копия всего store. Изменение результата не влияет на реестр.
    pub fn get_all_values(&self) -> HashMap<String, Value> {
        self.store.snapshot()
    }

    pub fn contains_key(
        &self,
        key: &str,
    ) -> bool {
        self.store.contains_key(key)
    }

    /// Все ключи store в отсортированном порядке.
    pub fn keys(&self) -> Vec<String> {
        self.store.keys()
    }

    // -------------------------------------------------------------------------
    // Интроспекция
    // -------------------------------------------------------------------------

    /// Количество регистраций для события.
    pub fn handler_count(
        &self,
        event: &str,
    ) -> usize {
        self.handlers
            .get(event)
            .map(|entry| entry.value().len())
            .unwrap_or(0)
    }

    pub fn has_subscribers(
        &self,
        event: &str,
    ) -> bool {
        self.handler_count(event) > 0
    }

    /// Имена всех событий, на которые когда-либо подписывались
    /// (отсортированы).
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .handlers
            .iter()
            .map(|entry| entry.key().to_string())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn stats(&self) -> DispatchStats {
        DispatchStats {
            publish_count: self.publish_count.load(Ordering::Relaxed),
            delivered_count: self.delivered_count.load(Ordering::Relaxed),
            failure_count: self.failure_count.load(Ordering::Relaxed),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Registry")
            .field("events", &self.handlers.len())
            .field("keys", &self.store.len())
            .field("stats", &self.stats())
            .finish()
    }
}
