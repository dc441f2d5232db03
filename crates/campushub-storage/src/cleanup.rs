//! Best-effort blob cleanup.
//!
//! Deleting a resource removes its blob before the record. The record
//! deletion is authoritative; a blob delete failure must never block it.
//! The outcome is an explicit value rather than a swallowed error so
//! callers can log what actually happened.

use campushub_core::error::AppError;
use campushub_core::traits::BlobStore;

/// Outcome of a best-effort blob deletion.
#[derive(Debug)]
pub enum BlobCleanup {
    /// The blob was deleted.
    Deleted,
    /// The record carried no blob key, so there was nothing to delete.
    NoKey,
    /// Deletion failed; the error is recorded here, never propagated.
    Failed(AppError),
}

impl BlobCleanup {
    /// Whether the cleanup left a blob behind due to a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Delete a blob without letting a failure escape.
pub async fn delete_blob_best_effort(store: &dyn BlobStore, key: Option<&str>) -> BlobCleanup {
    let Some(key) = key else {
        return BlobCleanup::NoKey;
    };

    match store.delete(key).await {
        Ok(()) => BlobCleanup::Deleted,
        Err(err) => BlobCleanup::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::LocalBlobStore;
    use bytes::Bytes;
    use campushub_core::config::storage::LocalStorageConfig;
    use campushub_core::traits::BlobStore;

    async fn store(dir: &std::path::Path) -> LocalBlobStore {
        LocalBlobStore::new(&LocalStorageConfig {
            root: dir.to_string_lossy().into_owned(),
            public_base_url: "http://localhost/blobs".into(),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_no_key_is_not_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        let outcome = delete_blob_best_effort(&store, None).await;
        assert!(matches!(outcome, BlobCleanup::NoKey));
        assert!(!outcome.is_failure());
    }

    #[tokio::test]
    async fn test_deletes_existing_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        store
            .put("resources/1_a.pdf", Bytes::from_static(b"x"), None)
            .await
            .unwrap();

        let outcome = delete_blob_best_effort(&store, Some("resources/1_a.pdf")).await;
        assert!(matches!(outcome, BlobCleanup::Deleted));
        assert!(!store.exists("resources/1_a.pdf").await.unwrap());
    }
}
