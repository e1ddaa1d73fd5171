//! Error types for local persistence

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed stored JSON: {0}")]
    Json(#[from] serde_json::Error),
}
