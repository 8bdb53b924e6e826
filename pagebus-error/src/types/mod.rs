pub mod config;
pub mod handler;
pub mod payload;
pub mod registry;

// Публичный экспорт всех типов ошибок из вложенных модулей, чтобы упростить
// доступ к ним из внешнего кода.
pub use config::*;
pub use handler::*;
pub use payload::*;
pub use registry::*;
