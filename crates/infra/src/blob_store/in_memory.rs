use std::collections::HashMap;
use std::sync::RwLock;

use super::{BlobStore, BlobStoreError, StorageObject};

/// In-memory blob store. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    objects: RwLock<HashMap<(String, String), Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, namespace: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .read()
            .unwrap()
            .get(&(namespace.to_string(), key.to_string()))
            .cloned()
    }

    /// Keys uploaded under `namespace`, in no particular order.
    pub fn keys(&self, namespace: &str) -> Vec<String> {
        self.objects
            .read()
            .unwrap()
            .keys()
            .filter(|(ns, _)| ns == namespace)
            .map(|(_, key)| key.clone())
            .collect()
    }
}

impl BlobStore for InMemoryBlobStore {
    fn upload(
        &self,
        namespace: &str,
        key: &str,
        bytes: Vec<u8>,
    ) -> Result<StorageObject, BlobStoreError> {
        let size = bytes.len();
        self.objects
            .write()
            .map_err(|_| BlobStoreError::Backend("lock poisoned".to_string()))?
            .insert((namespace.to_string(), key.to_string()), bytes);

        Ok(StorageObject {
            key: key.to_string(),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_returns_key_and_size() {
        let store = InMemoryBlobStore::new();
        let object = store
            .upload("shiplink", "911778899.pdf", b"%PDF-1.4".to_vec())
            .unwrap();
        assert_eq!(object.key, "911778899.pdf");
        assert_eq!(object.size, 8);
        assert_eq!(store.get("shiplink", "911778899.pdf"), Some(b"%PDF-1.4".to_vec()));
    }

    #[test]
    fn namespaces_are_isolated() {
        let store = InMemoryBlobStore::new();
        store.upload("a", "x.pdf", vec![1]).unwrap();
        store.upload("b", "y.pdf", vec![2]).unwrap();
        assert_eq!(store.keys("a"), vec!["x.pdf".to_string()]);
        assert!(store.get("a", "y.pdf").is_none());
    }
}
