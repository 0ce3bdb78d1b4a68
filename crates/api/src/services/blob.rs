//! Uploaded image storage.
//!
//! Invitation photos are stored as opaque blobs under a configured
//! directory and served back by filename.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while storing uploads.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Upload too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction over the upload store.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persists `bytes` under `filename` and returns the public path.
    async fn put(&self, filename: &str, bytes: &[u8]) -> Result<String, BlobError>;
}

/// Stores uploads on the local filesystem.
pub struct LocalBlobStore {
    dir: PathBuf,
    max_size_bytes: usize,
}

impl LocalBlobStore {
    pub fn new(dir: impl Into<PathBuf>, max_size_bytes: usize) -> Self {
        Self {
            dir: dir.into(),
            max_size_bytes,
        }
    }

    /// Directory uploads are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, filename: &str, bytes: &[u8]) -> Result<String, BlobError> {
        if filename.is_empty() || filename.contains('/') || filename.contains("..") {
            return Err(BlobError::InvalidFilename(filename.to_string()));
        }

        if bytes.len() > self.max_size_bytes {
            return Err(BlobError::TooLarge {
                size: bytes.len(),
                limit: self.max_size_bytes,
            });
        }

        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(filename);
        tokio::fs::write(&path, bytes).await?;

        debug!(path = %path.display(), size = bytes.len(), "Stored upload");

        Ok(format!("/uploads/{}", filename))
    }
}

/// Builds a collision-resistant upload filename from the original name.
///
/// The original name is reduced to a safe character set and prefixed with
/// the owning user and the current timestamp.
pub fn upload_filename(user_id: uuid::Uuid, unix_millis: i64, original: &str) -> String {
    let sanitized: String = original
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let sanitized = if sanitized.is_empty() {
        "upload".to_string()
    } else {
        sanitized
    };

    format!("{}_{}_{}", user_id, unix_millis, sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_upload_filename_sanitizes() {
        let id = Uuid::nil();
        let name = upload_filename(id, 1700000000000, "my photo (1).jpg");
        assert_eq!(
            name,
            format!("{}_1700000000000_my_photo__1_.jpg", id)
        );
    }

    #[test]
    fn test_upload_filename_empty_original() {
        let id = Uuid::nil();
        let name = upload_filename(id, 42, "");
        assert!(name.ends_with("_upload"));
    }

    #[tokio::test]
    async fn test_local_store_rejects_traversal() {
        let store = LocalBlobStore::new(std::env::temp_dir().join("eventcraft-test"), 1024);
        let result = store.put("../escape.jpg", b"data").await;
        assert!(matches!(result, Err(BlobError::InvalidFilename(_))));
    }

    #[tokio::test]
    async fn test_local_store_rejects_oversize() {
        let store = LocalBlobStore::new(std::env::temp_dir().join("eventcraft-test"), 4);
        let result = store.put("big.jpg", b"too big").await;
        assert!(matches!(result, Err(BlobError::TooLarge { .. })));
    }

    #[tokio::test]
    async fn test_local_store_put_roundtrip() {
        let dir = std::env::temp_dir().join(format!("eventcraft-test-{}", Uuid::new_v4()));
        let store = LocalBlobStore::new(&dir, 1024);
        let public_path = store.put("photo.jpg", b"bytes").await.unwrap();
        assert_eq!(public_path, "/uploads/photo.jpg");
        let written = tokio::fs::read(dir.join("photo.jpg")).await.unwrap();
        assert_eq!(written, b"bytes");
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
