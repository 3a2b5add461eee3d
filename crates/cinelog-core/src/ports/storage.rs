//! File storage port.

use async_trait::async_trait;

/// Capability for storing uploaded files, decoupled from the transport
/// that delivered the bytes.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persist `bytes` and return a stable reference to the stored file.
    /// `original_name` only influences the generated name; the reference
    /// is what gets persisted on the owning record.
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, StorageError>;

    /// Remove a previously stored file. Deleting a reference that no
    /// longer resolves is not an error.
    async fn delete(&self, reference: &str) -> Result<(), StorageError>;
}

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid file reference: {0}")]
    InvalidReference(String),
}
