//! Blob store port for label documents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod in_memory;

pub use in_memory::InMemoryBlobStore;

/// Receipt returned by a blob upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageObject {
    pub key: String,
    pub size: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlobStoreError {
    #[error("blob store backend error: {0}")]
    Backend(String),
}

/// Binary object storage, namespaced per plugin.
pub trait BlobStore: Send + Sync {
    fn upload(
        &self,
        namespace: &str,
        key: &str,
        bytes: Vec<u8>,
    ) -> Result<StorageObject, BlobStoreError>;
}

impl<T: BlobStore + ?Sized> BlobStore for std::sync::Arc<T> {
    fn upload(
        &self,
        namespace: &str,
        key: &str,
        bytes: Vec<u8>,
    ) -> Result<StorageObject, BlobStoreError> {
        (**self).upload(namespace, key, bytes)
    }
}
