use thiserror::Error;

pub type SimResult<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// Внешний симулятор не создал читаемый выходной файл.
    /// Не повторяется: симуляция детерминирована по своим входам
    #[error("Upstream process failed: {0}")]
    Upstream(String),

    /// Ошибка бинарного формата burst-файла
    #[error("Burst format error: {0}")]
    Burst(#[from] frb_types::BurstError),

    /// Ошибка записи файлов параметров или контейнера
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Некорректная конфигурация запуска
    #[error("Config error: {0}")]
    Config(String),
}
