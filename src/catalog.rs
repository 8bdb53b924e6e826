//! Каталог имён событий и ключей shared store.
//!
//! Реестр принимает любую строку как имя события, поэтому каталог является
//! только соглашением об именах, избавляющим модули от опечаток. Строки
//! доступны в двух видах: типизированный [`AppEvent`] и константы в
//! [`events`] для кода, который работает с `&str` напрямую.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Группа, к которой относится событие каталога.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EventGroup {
    /// Жизненный цикл модулей.
    Module,
    /// Изменения данных.
    Data,
    /// Пользовательская сессия.
    User,
    /// Системные события.
    System,
}

/// Известные события приложения.
///
/// Строковое представление (`as_str`, `Display`, `FromStr`) в kebab-case,
/// например `AppEvent::McMembersUpdated` ↔ `"mc-members-updated"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum AppEvent {
    // Module events
    ModuleLoaded,
    ModuleChanged,

    // Data events
    DataChanged,
    McMembersUpdated,
    ExpenseCategoriesUpdated,
    ApprovalMatrixUpdated,

    // User events
    UserLoggedIn,
    UserLoggedOut,

    // System events
    SystemError,
    ShowNotification,
}

impl AppEvent {
    /// Литеральное имя события.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn group(self) -> EventGroup {
        match self {
            Self::ModuleLoaded | Self::ModuleChanged => EventGroup::Module,
            Self::DataChanged
            | Self::McMembersUpdated
            | Self::ExpenseCategoriesUpdated
            | Self::ApprovalMatrixUpdated => EventGroup::Data,
            Self::UserLoggedIn | Self::UserLoggedOut => EventGroup::User,
            Self::SystemError | Self::ShowNotification => EventGroup::System,
        }
    }

    /// Все события каталога в порядке объявления.
    pub fn iter() -> impl Iterator<Item = AppEvent> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

/// Имена событий в виде строковых констант.
pub mod events {
    pub const MODULE_LOADED: &str = "module-loaded";
    pub const MODULE_CHANGED: &str = "module-changed";

    /// Автоматически публикуется при каждом `set_value`.
    pub const DATA_CHANGED: &str = "data-changed";
    pub const MC_MEMBERS_UPDATED: &str = "mc-members-updated";
    pub const EXPENSE_CATEGORIES_UPDATED: &str = "expense-categories-updated";
    pub const APPROVAL_MATRIX_UPDATED: &str = "approval-matrix-updated";

    pub const USER_LOGGED_IN: &str = "user-logged-in";
    pub const USER_LOGGED_OUT: &str = "user-logged-out";

    pub const SYSTEM_ERROR: &str = "system-error";
    pub const SHOW_NOTIFICATION: &str = "show-notification";
}

/// Ключи, которыми shared store заполняется при создании реестра.
pub mod keys {
    pub const MC_MEMBERS: &str = "mcMembers";
    pub const EXPENSE_CATEGORIES: &str = "expenseCategories";
    pub const APPROVAL_MATRIX: &str = "approvalMatrix";
    pub const USER: &str = "user";
    pub const CURRENT_MODULE: &str = "currentModule";
    pub const IS_LOGGED_IN: &str = "isLoggedIn";

    /// Все предзаполненные ключи.
    pub const SEEDED: [&str; 6] = [
        MC_MEMBERS,
        EXPENSE_CATEGORIES,
        APPROVAL_MATRIX,
        USER,
        CURRENT_MODULE,
        IS_LOGGED_IN,
    ];
}
