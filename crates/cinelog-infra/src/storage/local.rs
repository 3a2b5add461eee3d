//! Local-disk file storage.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use cinelog_core::ports::{FileStorage, StorageError};

/// Stores uploaded files under a single directory with generated
/// filenames. The returned reference is the generated filename; callers
/// expand it to a URL when serving it back.
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Keep only filesystem-safe characters from a client-supplied name.
    fn sanitize(name: &str) -> String {
        let cleaned: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if cleaned.is_empty() {
            "upload".to_string()
        } else {
            cleaned
        }
    }

    /// Resolve a stored reference to its filename. References may be the
    /// bare generated name or a full URL pointing at the uploads route,
    /// so only the last path segment counts.
    fn filename_of(reference: &str) -> Result<&str, StorageError> {
        let name = reference.rsplit('/').next().unwrap_or(reference);

        if name.is_empty() || name == ".." || name == "." {
            return Err(StorageError::InvalidReference(reference.to_string()));
        }

        Ok(name)
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let filename = format!("{}-{}", Uuid::new_v4(), Self::sanitize(original_name));
        let path = self.root.join(&filename);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        tracing::debug!(file = %filename, size = bytes.len(), "Stored uploaded file");

        Ok(filename)
    }

    async fn delete(&self, reference: &str) -> Result<(), StorageError> {
        let filename = Self::filename_of(reference)?;
        let path = self.root.join(filename);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Already gone - treat as deleted
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
