//! Crate error type.
//!
//! The scoring engine itself is total over its input domain and never
//! errors; failures only arise in the plumbing around it (file I/O,
//! JSON parsing, history ingestion).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriftscopeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("History error: {0}")]
    History(String),
}

/// Result type alias
pub type DriftscopeResult<T> = Result<T, DriftscopeError>;
