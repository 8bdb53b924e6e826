use std::fmt;

use num_enum::TryFromPrimitive;
#[cfg(feature = "strum")]
use strum_macros::{AsRefStr, EnumIter};

/// Коды статуса для категоризации ошибок.
///
/// # Диапазоны:
/// - 0xxx: Успех
/// - 1xxx: Общие ошибки
/// - 2xxx: Ошибки данных (shared store, payload)
/// - 3xxx: Ошибки обработчиков событий
/// - 4xxx: Конфигурация и логирование
///
/// # Реализация:
/// - `num_enum::TryFromPrimitive` даёт нативную реализацию `TryFrom<u32>`.
/// - опционально: `strum` для `AsRefStr`/`EnumIter` (feature = "strum").
#[cfg_attr(feature = "strum", derive(AsRefStr, EnumIter))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 0xxx: Успех ===
    Success = 0,

    // === 1xxx: Общие ошибки ===
    Internal = 1000,

    // === 2xxx: Ошибки данных ===
    NotFound = 2000,
    AlreadyExists = 2001,
    SerializationFailed = 2002,
    DeserializationFailed = 2003,

    // === 3xxx: Обработчики событий ===
    HandlerFailed = 3000,
    HandlerPanicked = 3001,
    PayloadMismatch = 3002,

    // === 4xxx: Конфигурация ===
    InvalidConfig = 4000,
    LoggingInitFailed = 4001,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl StatusCode {
    /// Числовое представление кода статуса.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Пытается получить вариант `StatusCode` из `u32`.
    ///
    /// Возвращает `None`, если значение не соответствует ни одному варианту.
    pub fn from_u32(v: u32) -> Option<Self> {
        Self::try_from(v).ok()
    }

    /// Вернёт `true`, если переданный `code` означает успешный результат.
    pub fn is_success(code: u32) -> bool {
        Self::Success as u32 == code
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для StatusCode
////////////////////////////////////////////////////////////////////////////////

impl From<StatusCode> for u32 {
    fn from(c: StatusCode) -> Self {
        c.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        #[cfg(feature = "strum")]
        {
            write!(f, "{} ({})", self.as_ref(), self.code())
        }
        #[cfg(not(feature = "strum"))]
        {
            write!(f, "{:?} ({})", self, self.code())
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет конвертацию через `TryFrom<u32>` и вспомогательную
    /// `from_u32`.
    #[test]
    fn test_from_u32() {
        assert_eq!(StatusCode::from_u32(3000), Some(StatusCode::HandlerFailed));
        assert_eq!(StatusCode::try_from(2000).ok(), Some(StatusCode::NotFound));
        assert_eq!(StatusCode::from_u32(9999), None);
        assert_eq!(u32::from(StatusCode::PayloadMismatch), 3002);
    }

    #[test]
    fn test_success() {
        assert!(StatusCode::is_success(0));
        assert!(!StatusCode::is_success(StatusCode::Internal.code()));
    }

    /// Тест проверяет, что Display содержит числовой код.
    #[test]
    fn test_display_contains_code() {
        let s = StatusCode::HandlerFailed.to_string();
        assert!(s.contains("3000"), "got {s}");
    }
}
