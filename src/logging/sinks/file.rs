use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling::daily};
use tracing_subscriber::{fmt, layer::Layer as LayerTrait, registry::LookupSpan};

use crate::logging::config::FileConfig;

/// Файловый layer с ежедневной ротацией.
///
/// Каталог должен существовать (см. `LoggingConfig::ensure_log_dir`).
/// Возвращённый guard нужно держать, пока нужна запись: при его drop
/// буфер сбрасывается на диск.
pub fn layer_with_config<S>(file: &FileConfig) -> (Box<dyn LayerTrait<S> + Send + Sync>, WorkerGuard)
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let file_appender = daily(&file.dir, &file.filename_prefix);
    let (non_blocking_writer, guard) = non_blocking(file_appender);

    let layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_writer);

    (Box::new(layer), guard)
}
