use thiserror::Error;

pub type InspectResult<T> = std::result::Result<T, InspectError>;

#[derive(Debug, Error)]
pub enum InspectError {
    /// Ошибка бинарного формата
    #[error("Burst format error: {0}")]
    Burst(#[from] frb_types::BurstError),

    /// Ошибка чтения файла
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
