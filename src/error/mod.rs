use pagebus_error::{ErrorExt, StatusCode};
pub use pagebus_error::{ConfigError, HandlerError, PayloadError, RegistryError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Общая ошибка крейта для кода, которому не важен конкретный источник.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Payload(e) => e.status_code(),
            Self::Registry(e) => e.status_code(),
            Self::Config(e) => e.status_code(),
        }
    }
}
