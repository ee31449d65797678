//! Error types for the crocus library.

use std::path::Path;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CrocusError>;

/// Errors produced by the term-statistics engine.
///
/// Only construction-time failures (bad configuration, unreadable word
/// lists) surface through this type; per-term statistic lookups absorb
/// index I/O failures locally and substitute a logged default instead.
#[derive(Error, Debug)]
pub enum CrocusError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid engine configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A word-list file could not be opened or read.
    #[error("couldn't open word list file '{path}': {source}")]
    WordList {
        path: String,
        source: std::io::Error,
    },

    /// A requested field does not exist in the index.
    #[error("no terms for field '{field}'; known fields are: {known}")]
    FieldNotFound { field: String, known: String },

    /// A stored document or document field could not be resolved.
    #[error("document error: {0}")]
    Document(String),

    /// Generic error for [`IndexReader`](crate::index::IndexReader)
    /// implementations without a more specific variant.
    #[error("index error: {0}")]
    Index(String),
}

impl CrocusError {
    /// Create an invalid-config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        CrocusError::InvalidConfig(msg.into())
    }

    /// Create a word-list error for `path`.
    pub fn word_list(path: &Path, source: std::io::Error) -> Self {
        CrocusError::WordList {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a field-not-found error naming the fields that do exist.
    pub fn field_not_found(field: impl Into<String>, known: &[String]) -> Self {
        CrocusError::FieldNotFound {
            field: field.into(),
            known: known.join(", "),
        }
    }

    /// Create a document error.
    pub fn document(msg: impl Into<String>) -> Self {
        CrocusError::Document(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        CrocusError::Index(msg.into())
    }
}
