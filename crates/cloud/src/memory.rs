use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::naming::object_key;
use crate::{ObjectStorage, StorageError};

const MEMORY_BASE_URL: &str = "memory://uploads";

/// Keeps uploads in a map keyed by object key.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url_for(key: &str) -> String {
        format!("{MEMORY_BASE_URL}/{key}")
    }

    /// Bytes stored under a URL returned by [`ObjectStorage::upload`].
    pub fn get(&self, url: &str) -> Option<Vec<u8>> {
        let key = url.strip_prefix(MEMORY_BASE_URL)?.trim_start_matches('/');
        let objects = match self.objects.lock() {
            Ok(objects) => objects,
            Err(poisoned) => poisoned.into_inner(),
        };
        objects.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        match self.objects.lock() {
            Ok(objects) => objects.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        folder: &str,
        filename: &str,
    ) -> Result<String, StorageError> {
        if bytes.is_empty() {
            return Err(StorageError::Empty);
        }
        let key = object_key(folder, filename);
        let mut objects = match self.objects.lock() {
            Ok(objects) => objects,
            Err(poisoned) => poisoned.into_inner(),
        };
        objects.insert(key.clone(), bytes);
        Ok(Self::url_for(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folders;

    #[tokio::test]
    async fn upload_then_get() {
        let storage = MemoryStorage::new();
        let url = storage
            .upload(b"bytes".to_vec(), folders::PORTADAS, "frente.png")
            .await
            .unwrap();
        assert!(url.starts_with("memory://uploads/portadas/"));
        assert_eq!(storage.get(&url).as_deref(), Some(&b"bytes"[..]));
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let storage = MemoryStorage::new();
        let result = storage.upload(Vec::new(), folders::PORTADAS, "a.png").await;
        assert!(matches!(result, Err(StorageError::Empty)));
        assert!(storage.is_empty());
    }
}
