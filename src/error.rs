//! Error types for image-search

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Storage init error: {0}")]
    StorageInit(String),

    #[error("Traversal error: {0}")]
    Traversal(String),

    #[error("Extraction error for {path}: {reason}")]
    Extraction { path: String, reason: String },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Refusing to store empty text for {0}")]
    EmptyText(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SearchError {
    pub fn extraction(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::Extraction {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
