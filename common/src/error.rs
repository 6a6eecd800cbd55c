use std::path::PathBuf;

use thiserror::Error;

/// Ошибки загрузки файла правил
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Файл не удалось прочитать
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Файл не является корректным TOML
    #[error("cannot parse rules: {0}")]
    Parse(#[from] toml::de::Error),

    /// Нет массива `rules`
    #[error("`rules` array is missing")]
    MissingRules,

    /// Массив `rules` пуст
    #[error("`rules` array is empty")]
    EmptyRules,

    /// Правило не является таблицей
    #[error("rule #{index} is not a table")]
    NotATable { index: usize },

    /// Нет обязательного строкового поля
    #[error("rule #{index}: missing string field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// Неизвестный вид правила
    #[error("rule #{index}: unknown kind `{kind}`")]
    UnknownKind { index: usize, kind: String },
}

/// Ошибки инициализации логирования
#[derive(Error, Debug)]
pub enum InitLogError {
    #[error("invalid log level `{level}`")]
    Level {
        level: String,
        source: log::ParseLevelError,
    },

    #[error("cannot open log file {}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("logger already set: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}
