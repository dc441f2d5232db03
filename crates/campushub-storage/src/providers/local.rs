//! Local filesystem blob store (development and tests).

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use tokio::fs;
use tracing::debug;

use campushub_core::config::storage::LocalStorageConfig;
use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_core::traits::BlobStore;

/// Filesystem-backed blob store.
///
/// URLs point at a static file route under `public_base_url`; the
/// "signed" variant only appends an expiry marker and performs no real
/// access control. Development use only.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Root directory for all stored blobs.
    root: PathBuf,
    /// Public base URL for serving stored blobs.
    base_url: String,
}

impl LocalBlobStore {
    /// Create a new local blob store rooted at the configured directory.
    pub async fn new(config: &LocalStorageConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.root);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create blob root: {}", root.display()),
                e,
            )
        })?;

        Ok(Self {
            root,
            base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a key to an absolute path within the root.
    fn resolve(&self, key: &str) -> PathBuf {
        let clean = key.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// The public URL of an object.
    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key.trim_start_matches('/'))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn put(&self, key: &str, data: Bytes, _content_type: Option<&str>) -> AppResult<String> {
        let full_path = self.resolve(key);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write blob: {key}"), e)
        })?;

        debug!(key, bytes = data.len(), "Stored blob");
        Ok(self.object_url(key))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_path = self.resolve(key);
        if full_path.exists() {
            fs::remove_file(&full_path).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete blob: {key}"),
                    e,
                )
            })?;
        }
        Ok(())
    }

    async fn signed_get_url(&self, key: &str, ttl: Duration) -> AppResult<String> {
        if !self.exists(key).await? {
            return Err(AppError::not_found(format!("Blob not found: {key}")));
        }

        let expires = Utc::now().timestamp() + ttl.as_secs() as i64;
        Ok(format!("{}?expires={}", self.object_url(key), expires))
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.resolve(key).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store(dir: &tempfile::TempDir) -> LocalBlobStore {
        LocalBlobStore::new(&LocalStorageConfig {
            root: dir.path().to_string_lossy().into_owned(),
            public_base_url: "http://localhost:5000/blobs".to_string(),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_put_exists_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        let url = store
            .put("resources/1_notes.pdf", Bytes::from("pdf bytes"), None)
            .await
            .unwrap();
        assert_eq!(url, "http://localhost:5000/blobs/resources/1_notes.pdf");
        assert!(store.exists("resources/1_notes.pdf").await.unwrap());

        store.delete("resources/1_notes.pdf").await.unwrap();
        assert!(!store.exists("resources/1_notes.pdf").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        store.delete("resources/nothing.bin").await.unwrap();
    }

    #[tokio::test]
    async fn test_signed_url_carries_expiry() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        store
            .put("resources/2_a.txt", Bytes::from("x"), Some("text/plain"))
            .await
            .unwrap();

        let url = store
            .signed_get_url("resources/2_a.txt", Duration::from_secs(300))
            .await
            .unwrap();
        assert!(url.contains("?expires="));

        let missing = store
            .signed_get_url("resources/none.txt", Duration::from_secs(300))
            .await;
        assert!(missing.is_err());
    }
}
