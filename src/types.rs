//! Error results that can be returned from the generators

use thiserror::Error;

/// Fatal errors, including errors from third-party libraries
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fixture error: {0}")]
    Fixture(String),

    #[error("emit error: {0}")]
    Emit(String),
}

/// Result that can be returned which holds either T or an Error
pub type Result<T> = std::result::Result<T, anyhow::Error>;
