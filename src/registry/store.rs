use std::collections::HashMap;

use dashmap::DashMap;
use serde_json::Value;

use crate::SeedData;

/// Хранилище shared data: строковый ключ → произвольное JSON-значение.
///
/// Тип закрыт внутри крейта: снаружи писать можно только через
/// [`Registry::set_value`](crate::Registry::set_value), который публикует
/// `data-changed`.
#[derive(Debug, Default)]
pub(crate) struct SharedStore {
    data: DashMap<String, Value>,
}

impl SharedStore {
    pub(crate) fn from_seed(seed: SeedData) -> Self {
        let data = DashMap::new();
        for (key, value) in seed.into_entries() {
            data.insert(key, value);
        }
        Self { data }
    }

    /// Перезаписывает или создаёт значение.
    pub(crate) fn insert(
        &self,
        key: String,
        value: Value,
    ) {
        self.data.insert(key, value);
    }

    pub(crate) fn get(
        &self,
        key: &str,
    ) -> Option<Value> {
        self.data.get(key).map(|entry| entry.value().clone())
    }

    pub(crate) fn contains_key(
        &self,
        key: &str,
    ) -> bool {
        self.data.contains_key(key)
    }

    /// Копия всего содержимого; изменения копии не затрагивают store.
    pub(crate) fn snapshot(&self) -> HashMap<String, Value> {
        self.data
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Ключи в отсортированном порядке.
    pub(crate) fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.data.iter().map(|entry| entry.key().clone()).collect();
        keys.sort_unstable();
        keys
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::keys;

    #[test]
    fn test_seeded_store() {
        let store = SharedStore::from_seed(SeedData::default());
        assert_eq!(store.len(), keys::SEEDED.len());
        assert_eq!(store.get(keys::CURRENT_MODULE), Some(json!("dashboard")));
    }

    /// Тест проверяет, что повторная запись перезаписывает значение.
    #[test]
    fn test_overwrite_value() {
        let store = SharedStore::default();
        store.insert("k".into(), json!(1));
        store.insert("k".into(), json!(2));
        assert_eq!(store.get("k"), Some(json!(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = SharedStore::default();
        assert_eq!(store.get("nope"), None);
        assert!(!store.contains_key("nope"));
    }

    /// Тест проверяет, что snapshot отвязан от store.
    #[test]
    fn test_snapshot_is_detached() {
        let store = SharedStore::default();
        store.insert("list".into(), json!([1, 2]));

        let mut copy = store.snapshot();
        copy.insert("list".into(), json!([]));
        copy.insert("extra".into(), json!(true));

        assert_eq!(store.get("list"), Some(json!([1, 2])));
        assert!(!store.contains_key("extra"));
    }

    #[test]
    fn test_keys_sorted() {
        let store = SharedStore::from_seed(SeedData::default());
        let keys = store.keys();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
