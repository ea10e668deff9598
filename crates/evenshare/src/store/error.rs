//! Error types for durable key-value storage.

use std::path::PathBuf;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by a [`KeyValueStore`](super::KeyValueStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("Failed to access store '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store contents could not be encoded.
    #[error("Failed to encode store contents: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing file exists but does not hold a string map.
    #[error("Store '{}' is corrupt: {message}", path.display())]
    Corrupt { path: PathBuf, message: String },

    /// The medium refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a corruption error.
    pub fn corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if the backing file was unreadable or unwritable.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
