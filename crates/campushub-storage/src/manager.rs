//! Blob store provider selection.

use std::sync::Arc;

use campushub_core::config::storage::StorageConfig;
use campushub_core::error::AppError;
use campushub_core::result::AppResult;
use campushub_core::traits::BlobStore;

use crate::providers::{LocalBlobStore, S3BlobStore};

/// Build the configured blob store provider.
pub async fn build_blob_store(config: &StorageConfig) -> AppResult<Arc<dyn BlobStore>> {
    match config.provider.as_str() {
        "s3" => {
            let store = S3BlobStore::new(&config.s3).await?;
            Ok(Arc::new(store))
        }
        "local" => {
            let store = LocalBlobStore::new(&config.local).await?;
            Ok(Arc::new(store))
        }
        other => Err(AppError::configuration(format!(
            "Unknown blob store provider: '{other}'. Expected 's3' or 'local'"
        ))),
    }
}
