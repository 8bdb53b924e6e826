//! Типизированные payload событий и начальное содержимое shared store.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::catalog::keys;

/// Payload события `data-changed`: `{"key": .., "value": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataChanged {
    pub key: String,
    pub value: Value,
}

impl DataChanged {
    pub fn new(
        key: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// JSON-представление без промежуточной сериализации (не может упасть).
    pub fn to_value(&self) -> Value {
        json!({ "key": self.key, "value": self.value })
    }
}

/// Запись о текущем пользователе (`user` в shared store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub name: String,
    pub role: String,
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self {
            name: "System Admin".to_string(),
            role: "Administrator".to_string(),
        }
    }
}

/// Начальное содержимое shared store.
///
/// `Default` совпадает с набором ключей, которым реестр всегда
/// предзаполняется: пустые списки участников и категорий расходов, пустая
/// матрица согласований, администратор по умолчанию, модуль `dashboard` и
/// признак входа в систему.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub mc_members: Vec<Value>,
    pub expense_categories: Vec<Value>,
    pub approval_matrix: Map<String, Value>,
    pub user: UserIdentity,
    pub current_module: String,
    pub is_logged_in: bool,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            mc_members: Vec::new(),
            expense_categories: Vec::new(),
            approval_matrix: Map::new(),
            user: UserIdentity::default(),
            current_module: "dashboard".to_string(),
            is_logged_in: true,
        }
    }
}

impl SeedData {
    /// Разворачивает seed в пары `(ключ, значение)` для shared store.
    pub fn into_entries(self) -> Vec<(String, Value)> {
        vec![
            (keys::MC_MEMBERS.to_string(), Value::Array(self.mc_members)),
            (
                keys::EXPENSE_CATEGORIES.to_string(),
                Value::Array(self.expense_categories),
            ),
            (
                keys::APPROVAL_MATRIX.to_string(),
                Value::Object(self.approval_matrix),
            ),
            (
                keys::USER.to_string(),
                json!({ "name": self.user.name, "role": self.user.role }),
            ),
            (
                keys::CURRENT_MODULE.to_string(),
                Value::String(self.current_module),
            ),
            (keys::IS_LOGGED_IN.to_string(), Value::Bool(self.is_logged_in)),
        ]
    }
}
