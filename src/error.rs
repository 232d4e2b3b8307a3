// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrepError>;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("XML parsing error in {file}: {message}")]
    Xml { file: String, message: String },

    #[error("{file}: {element} #{index} is missing <{field}>")]
    MissingField {
        file: String,
        element: String,
        index: usize,
        field: String,
    },

    #[error("{file}: {element} #{index} has an empty <{field}>")]
    EmptyField {
        file: String,
        element: String,
        index: usize,
        field: String,
    },

    #[error("{file}: RECORD #{index} has a non-numeric id {value:?}")]
    InvalidId {
        file: String,
        index: usize,
        value: String,
    },

    #[error("{file}: QUERY #{index} has an unreadable relevance score {score:?}")]
    InvalidScore {
        file: String,
        index: usize,
        score: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrepError {
    pub fn file_operation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOperation {
            path: path.into(),
            source,
        }
    }
}
