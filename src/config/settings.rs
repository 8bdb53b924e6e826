use std::path::PathBuf;

use config::{Config, Environment, Map};
use pagebus_error::ConfigError;
use serde::{Deserialize, Serialize};

use crate::{
    logging::{FileConfig, LogFormat, LoggingConfig},
    SeedData, UserIdentity,
};

/// Настройки приложения: seed для shared store и параметры логирования.
///
/// Источники по приоритету: переменные окружения с префиксом `PAGEBUS_`
/// (`PAGEBUS_CURRENT_MODULE`, `PAGEBUS_USER_NAME`, `PAGEBUS_USER_ROLE`,
/// `PAGEBUS_LOGGED_IN`, `PAGEBUS_LOG_LEVEL`, `PAGEBUS_LOG_FORMAT`,
/// `PAGEBUS_LOG_DIR`), затем значения по умолчанию.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub current_module: String,
    pub user_name: String,
    pub user_role: String,
    pub logged_in: bool,
    pub log_level: String,
    pub log_format: LogFormat,
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    /// Загружает настройки из окружения процесса.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Загружает настройки; `env` подменяет окружение процесса (ключи в виде
    /// `PAGEBUS_*`).
    pub fn load_from(env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let settings: Self = build_config(env)
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.current_module.trim().is_empty() {
            return Err(ConfigError::invalid("current_module", "must not be empty"));
        }
        if self.user_name.trim().is_empty() {
            return Err(ConfigError::invalid("user_name", "must not be empty"));
        }
        self.logging().validate()
    }

    /// Начальное содержимое shared store.
    pub fn seed(&self) -> SeedData {
        SeedData {
            user: UserIdentity {
                name: self.user_name.clone(),
                role: self.user_role.clone(),
            },
            current_module: self.current_module.clone(),
            is_logged_in: self.logged_in,
            ..SeedData::default()
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            file: self.log_dir.clone().map(|dir| FileConfig {
                dir,
                ..FileConfig::default()
            }),
            ..LoggingConfig::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let seed = SeedData::default();
        Self {
            current_module: seed.current_module,
            user_name: seed.user.name,
            user_role: seed.user.role,
            logged_in: seed.is_logged_in,
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            log_dir: None,
        }
    }
}

fn build_config(env: Option<Map<String, String>>) -> Result<Config, config::ConfigError> {
    let defaults = Settings::default();
    Config::builder()
        // Добавляем значения по умолчанию
        .set_default("current_module", defaults.current_module)?
        .set_default("user_name", defaults.user_name)?
        .set_default("user_role", defaults.user_role)?
        .set_default("logged_in", defaults.logged_in)?
        .set_default("log_level", defaults.log_level)?
        .set_default("log_format", defaults.log_format.to_string())?
        // Переменные окружения с префиксом PAGEBUS_
        .add_source(Environment::with_prefix("PAGEBUS").source(env))
        .build()
}
