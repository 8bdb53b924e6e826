pub mod config;
pub mod filters;
pub mod formatter;
pub mod handle;
pub mod sinks;

pub use self::config::{FileConfig, LogFormat, LoggingConfig};
pub use handle::LoggingHandle;
use pagebus_error::ConfigError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация логирования с конфигурацией.
///
/// Устанавливает глобальный subscriber. Повторный вызов в том же процессе
/// возвращает [`ConfigError::LoggingInit`].
pub fn init_logging(mut config: LoggingConfig) -> Result<LoggingHandle, ConfigError> {
    config.apply_env_overrides()?;
    config.validate()?;
    config.ensure_log_dir()?;

    let env_filter = filters::build_filter_from_config(&config);
    let mut layers = Vec::new();

    // Console layer
    layers.push(formatter::build_formatter_from_config(&config));

    // File layer
    let file_guard = match &config.file {
        Some(file) => {
            let (file_layer, guard) = sinks::file::layer_with_config(file);
            layers.push(file_layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .map_err(|e| ConfigError::LoggingInit(e.to_string()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        log_format = %config.format,
        file_enabled = config.file.is_some(),
        "Logging system initialized"
    );

    Ok(LoggingHandle::new(file_guard))
}
