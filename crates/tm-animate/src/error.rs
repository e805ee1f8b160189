use thiserror::Error;
use tm_core::CoreError;

#[derive(Debug, Error)]
pub enum AnimateError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("animation configuration error: {0}")]
    Config(String),

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type AnimateResult<T> = Result<T, AnimateError>;
