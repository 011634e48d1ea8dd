use thiserror::Error;

/// Storage-specific error types for the Tagkeeper terminal.
///
/// A missing file is never an error: loaders fall back to defaults. These
/// variants cover the failures that remain.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be encoded or decoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File name is empty or escapes the data directory
    #[error("Invalid file name: {0}")]
    InvalidName(String),

    /// Failure reported by a non-filesystem backend
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Specialized result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
