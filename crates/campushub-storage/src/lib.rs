//! # campushub-storage
//!
//! Blob store providers for CampusHub. Implements the
//! [`BlobStore`](campushub_core::traits::BlobStore) trait for S3 and the
//! local filesystem, plus object key generation.

pub mod cleanup;
pub mod key;
pub mod manager;
pub mod providers;

pub use cleanup::{BlobCleanup, delete_blob_best_effort};
pub use manager::build_blob_store;
