//! Глобальный subscriber можно установить только один раз на процесс.

use pagebus::{
    logging::FileConfig, init_logging, ConfigError, LogFormat, LoggingConfig, Registry,
};
use serde_json::json;

#[test]
fn test_init_logging_with_file_sink() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("logs");
    let config = LoggingConfig {
        level: "debug".into(),
        format: LogFormat::Json,
        with_ansi: false,
        file: Some(FileConfig {
            dir: dir.clone(),
            ..Default::default()
        }),
        ..Default::default()
    };

    let handle = init_logging(config.clone()).unwrap();
    assert!(handle.has_file_sink());
    assert!(dir.is_dir());

    // Ошибка обработчика проходит через установленный subscriber.
    let registry = Registry::new();
    registry.subscribe("broken", |_| panic!("boom"));
    registry.publish("broken", &json!(null));
    assert_eq!(registry.stats().failure_count, 1);

    let err = init_logging(config).unwrap_err();
    assert!(matches!(err, ConfigError::LoggingInit(_)));

    handle.shutdown();
    let written = std::fs::read_dir(&dir).unwrap().count();
    assert!(written >= 1);
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let err = init_logging(LoggingConfig {
        level: "verbose".into(),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "log_level", .. }));
}
