//! Blob storage seam.
//!
//! Handlers never touch the filesystem directly; they hand bytes and a
//! storage key to a [`FileStore`]. The only shipped implementation writes
//! to a local directory. Image resizing/cropping is out of scope; the
//! store moves opaque bytes.

use std::path::PathBuf;

use crate::error::CoreError;

/// Store/delete a blob by key.
///
/// Keys are relative slash-separated paths (e.g. `banners/42/cover.jpg`).
#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    /// Persist `bytes` under `key`, overwriting any previous blob.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), CoreError>;

    /// Delete the blob under `key`. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CoreError>;
}

/// [`FileStore`] backed by a directory on local disk.
pub struct LocalDiskStore {
    root: PathBuf,
}

impl LocalDiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a storage key to an on-disk path, rejecting traversal.
    fn resolve(&self, key: &str) -> Result<PathBuf, CoreError> {
        if key.is_empty() || key.starts_with('/') || key.split('/').any(|part| part == "..") {
            return Err(CoreError::Validation(format!("Invalid storage key '{key}'")));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait::async_trait]
impl FileStore for LocalDiskStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), CoreError> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::Internal(format!("create dir failed: {e}")))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| CoreError::Internal(format!("write '{key}' failed: {e}")))
    }

    async fn delete(&self, key: &str) -> Result<(), CoreError> {
        let path = self.resolve(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Internal(format!("delete '{key}' failed: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_delete_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path());

        store.put("moods/7/photo.jpg", b"jpeg bytes").await.unwrap();
        let on_disk = dir.path().join("moods/7/photo.jpg");
        assert_eq!(std::fs::read(&on_disk).unwrap(), b"jpeg bytes");

        store.delete("moods/7/photo.jpg").await.unwrap();
        assert!(!on_disk.exists());
    }

    #[tokio::test]
    async fn delete_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path());
        store.delete("never/stored.png").await.unwrap();
    }

    #[tokio::test]
    async fn rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDiskStore::new(dir.path());
        assert!(store.put("../escape.txt", b"x").await.is_err());
        assert!(store.put("/absolute.txt", b"x").await.is_err());
    }
}
