use common::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AppError> for i32 {
    fn from(err: AppError) -> i32 {
        match err {
            AppError::Config(_) => 2,
            AppError::Io(_) => 2,
        }
    }
}
