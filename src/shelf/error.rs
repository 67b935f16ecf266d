use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid import format: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
