use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки процессного (глобального) экземпляра реестра.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a global registry is already installed")]
    AlreadyInstalled,

    #[error("no global registry has been installed")]
    NotInstalled,
}

impl ErrorExt for RegistryError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyInstalled => StatusCode::AlreadyExists,
            Self::NotInstalled => StatusCode::NotFound,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            RegistryError::AlreadyInstalled.status_code(),
            StatusCode::AlreadyExists
        );
        assert_eq!(RegistryError::NotInstalled.status_code(), StatusCode::NotFound);
        assert_eq!(
            RegistryError::NotInstalled.client_message(),
            "no global registry has been installed"
        );
    }
}
