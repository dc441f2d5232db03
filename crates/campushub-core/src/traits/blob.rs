//! Blob store trait for pluggable binary object storage backends.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for binary object storage backends.
///
/// Implementations exist for S3 and the local filesystem. The trait is
/// defined here in `campushub-core` and implemented in
/// `campushub-storage`. Objects are addressed by an opaque string key;
/// the store also hands out time-limited signed GET URLs so downloads
/// never stream through the application.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "s3", "local").
    fn provider_type(&self) -> &str;

    /// Store an object under the given key and return its public URL.
    async fn put(&self, key: &str, data: Bytes, content_type: Option<&str>) -> AppResult<String>;

    /// Delete the object stored under the given key.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Produce a time-limited signed URL granting read access to the object.
    async fn signed_get_url(&self, key: &str, ttl: Duration) -> AppResult<String>;

    /// Check whether an object exists under the given key.
    async fn exists(&self, key: &str) -> AppResult<bool>;
}
