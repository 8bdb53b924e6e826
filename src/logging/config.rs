use std::{env, fs, path::PathBuf, str::FromStr};

use pagebus_error::ConfigError;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::level_filters::LevelFilter;

/// Формат консольного вывода.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Файловый sink (ежедневная ротация).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    pub dir: PathBuf,
    pub filename_prefix: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            filename_prefix: "pagebus.log".to_string(),
        }
    }
}

/// Конфигурация логирования.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень по умолчанию (`trace`..`error`, `off`), если `RUST_LOG` не
    /// задан.
    pub level: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_line_numbers: bool,
    /// `None`: только консоль.
    pub file: Option<FileConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            with_ansi: true,
            with_target: true,
            with_line_numbers: false,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Переопределения из окружения: `PAGEBUS_LOG_LEVEL`,
    /// `PAGEBUS_LOG_FORMAT`, `PAGEBUS_LOG_DIR`.
    ///
    /// Нераспознанный формат даёт [`ConfigError::Load`], как и при загрузке
    /// [`Settings`](crate::Settings).
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(level) = env::var("PAGEBUS_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(format) = env::var("PAGEBUS_LOG_FORMAT") {
            self.format = LogFormat::from_str(&format).map_err(|_| {
                ConfigError::Load(format!("PAGEBUS_LOG_FORMAT: unknown log format '{format}'"))
            })?;
        }
        if let Ok(dir) = env::var("PAGEBUS_LOG_DIR") {
            let file = self.file.get_or_insert_with(FileConfig::default);
            file.dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| ConfigError::invalid("log_level", format!("unknown level '{}'", self.level)))?;

        if let Some(file) = &self.file {
            if file.dir.as_os_str().is_empty() {
                return Err(ConfigError::invalid("log_dir", "must not be empty"));
            }
            if file.filename_prefix.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "log_filename_prefix",
                    "must not be empty",
                ));
            }
        }
        Ok(())
    }

    /// Создаёт каталог для файлового sink, если он включён.
    pub fn ensure_log_dir(&self) -> Result<(), ConfigError> {
        if let Some(file) = &self.file {
            fs::create_dir_all(&file.dir).map_err(|e| {
                ConfigError::invalid("log_dir", format!("{}: {e}", file.dir.display()))
            })?;
        }
        Ok(())
    }

    /// Директива для `EnvFilter`.
    pub fn build_filter_directive(&self) -> String {
        self.level.trim().to_lowercase()
    }
}
