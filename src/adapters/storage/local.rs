//! Local-disk implementation of the FileStorage port.

use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{FileStorage, StoredFile};

/// Writes uploads to a directory on the local filesystem.
///
/// Stored names are prefixed with a fresh UUID so concurrent uploads of the
/// same file never collide. Serving the bytes back is the front proxy's job;
/// this adapter only produces the URL path.
pub struct LocalFileStorage {
    dir: PathBuf,
    url_prefix: String,
}

impl LocalFileStorage {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    /// Strips any path components a client smuggled into the filename.
    fn sanitize(original_name: &str) -> String {
        let base = original_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(original_name);
        let cleaned: String = base
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            .collect();
        if cleaned.is_empty() {
            "upload".to_string()
        } else {
            cleaned
        }
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, DomainError> {
        let filename = format!("{}-{}", Uuid::new_v4(), Self::sanitize(original_name));
        let path = self.dir.join(&filename);

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to create upload dir: {}", e),
            )
        })?;
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            DomainError::new(ErrorCode::StorageError, format!("Failed to store file: {}", e))
        })?;

        Ok(StoredFile {
            url: format!("{}/{}", self.url_prefix.trim_end_matches('/'), filename),
            filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_bytes_under_unique_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(dir.path(), "/uploads");

        let first = storage.store("photo.jpg", b"abc").await.unwrap();
        let second = storage.store("photo.jpg", b"def").await.unwrap();

        assert_ne!(first.filename, second.filename);
        assert!(first.filename.ends_with("photo.jpg"));
        assert!(first.url.starts_with("/uploads/"));

        let stored = tokio::fs::read(dir.path().join(&first.filename)).await.unwrap();
        assert_eq!(stored, b"abc");
    }

    #[tokio::test]
    async fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let storage = LocalFileStorage::new(&nested, "/uploads");

        let stored = storage.store("file.txt", b"x").await.unwrap();
        assert!(nested.join(stored.filename).exists());
    }

    #[test]
    fn sanitize_strips_paths_and_odd_characters() {
        assert_eq!(LocalFileStorage::sanitize("../../etc/passwd"), "passwd");
        assert_eq!(LocalFileStorage::sanitize("a b?.png"), "ab.png");
        assert_eq!(LocalFileStorage::sanitize("///"), "upload");
        assert_eq!(LocalFileStorage::sanitize("report-2026_v1.pdf"), "report-2026_v1.pdf");
    }
}
