//! Error types for pomoclock-core.
//!
//! Only the storage layer produces errors; the engine's command surface is
//! total. Persistence failures after construction are logged and swallowed,
//! with the in-memory state remaining authoritative for the session.

use std::path::PathBuf;
use thiserror::Error;

/// Storage-layer errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The per-user data directory could not be created.
    #[error("failed to create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for StoreError
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
