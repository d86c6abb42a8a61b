use thiserror::Error;

/// Результат для операций с burst-форматами.
pub type BurstResult<T> = std::result::Result<T, BurstError>;

/// Типы ошибок бинарных форматов FRB.
#[derive(Debug, Error)]
pub enum BurstError {
    /// В буфере осталось меньше байт, чем требует поле
    #[error("Truncated input at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Неизвестный тег формата (ожидалось/найдено)
    #[error("Unsupported format tag: {0:?}")]
    UnsupportedFormat(String),

    /// Распознанное, но не поддерживаемое расширение формата
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(&'static str),

    /// Длина полезной нагрузки не согласуется с заголовком
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Текст длиннее фиксированного поля при записи (усечение запрещено)
    #[error("Field too long: '{field}' is {len} bytes, limit {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BurstError {
    /// Удобные конструкторы
    pub fn malformed<S: Into<String>>(s: S) -> Self {
        Self::MalformedPayload(s.into())
    }

    pub fn unsupported_format<S: Into<String>>(s: S) -> Self {
        Self::UnsupportedFormat(s.into())
    }
}
