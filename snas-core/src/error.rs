//! Error types for snas-core

use thiserror::Error;

/// Result type alias using the crate's top-level error type.
pub type Result<T> = std::result::Result<T, SnasError>;

/// Top-level error type for snas-core
#[derive(Error, Debug)]
pub enum SnasError {
    /// Malformed or missing required parameters. Reported immediately,
    /// without partial processing.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A referenced achievement id does not exist.
    #[error("achievement not found: {0}")]
    RecordNotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("import error: {0}")]
    Import(#[from] ImportError),
}

impl SnasError {
    /// HTTP-style status code used in the boundary error envelope.
    pub fn status_code(&self) -> u16 {
        match self {
            SnasError::InvalidInput(_) => 400,
            SnasError::RecordNotFound(_) => 404,
            SnasError::Store(_) => 502,
            SnasError::Import(ImportError::Store(_)) => 502,
            SnasError::Import(_) => 400,
        }
    }
}

/// Errors from an achievement record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("achievement not found: {0}")]
    NotFound(String),

    /// An achievement with the same `(name, issuer)` already exists.
    /// Enforced at insert so racing imports cannot double-insert.
    #[error("duplicate achievement: {name} ({issuer})")]
    Duplicate { name: String, issuer: String },

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from the import pipeline
#[derive(Error, Debug)]
pub enum ImportError {
    /// A single-record operation was given a record that fails validation.
    /// Batch imports collect per-record failures instead of returning this.
    #[error("record validation failed: {0}")]
    Validation(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
