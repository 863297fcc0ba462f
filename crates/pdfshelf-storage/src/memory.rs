//! In-memory storage backend.
//!
//! Keeps objects in insertion order, records every call made against it, and lets
//! tests inject failures per operation or per key.

use crate::traits::{Storage, StorageBackend, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::Mutex;

/// A call made against [`MemoryStorage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageCall {
    Put { key: String, content_type: String },
    List,
    Sign { key: String, expires_in: Duration },
    Delete { key: String },
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub data: Bytes,
    pub content_type: String,
}

#[derive(Default)]
struct Inner {
    objects: Vec<StoredObject>,
    calls: Vec<StorageCall>,
    failing_sign_keys: HashSet<String>,
    fail_put: Option<String>,
    fail_list: Option<String>,
    fail_delete: Option<String>,
}

#[derive(Default)]
pub struct MemoryStorage {
    bucket: String,
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Insert an object directly, without recording a call.
    pub async fn seed(&self, key: &str, data: &[u8], content_type: &str) {
        let mut inner = self.inner.lock().await;
        upsert(
            &mut inner.objects,
            StoredObject {
                key: key.to_string(),
                data: Bytes::copy_from_slice(data),
                content_type: content_type.to_string(),
            },
        );
    }

    /// Make `presigned_get_url` fail for `key`.
    pub async fn fail_signing_for(&self, key: &str) {
        self.inner
            .lock()
            .await
            .failing_sign_keys
            .insert(key.to_string());
    }

    pub async fn fail_puts(&self, message: &str) {
        self.inner.lock().await.fail_put = Some(message.to_string());
    }

    pub async fn fail_lists(&self, message: &str) {
        self.inner.lock().await.fail_list = Some(message.to_string());
    }

    pub async fn fail_deletes(&self, message: &str) {
        self.inner.lock().await.fail_delete = Some(message.to_string());
    }

    pub async fn calls(&self) -> Vec<StorageCall> {
        self.inner.lock().await.calls.clone()
    }

    pub async fn keys(&self) -> Vec<String> {
        self.inner
            .lock()
            .await
            .objects
            .iter()
            .map(|o| o.key.clone())
            .collect()
    }

    pub async fn object(&self, key: &str) -> Option<StoredObject> {
        self.inner
            .lock()
            .await
            .objects
            .iter()
            .find(|o| o.key == key)
            .cloned()
    }

    /// Number of `put` calls recorded so far.
    pub async fn put_count(&self) -> usize {
        self.inner
            .lock()
            .await
            .calls
            .iter()
            .filter(|c| matches!(c, StorageCall::Put { .. }))
            .count()
    }

    /// Keys that `presigned_get_url` was called for, in call order.
    pub async fn signed_keys(&self) -> Vec<String> {
        self.inner
            .lock()
            .await
            .calls
            .iter()
            .filter_map(|c| match c {
                StorageCall::Sign { key, .. } => Some(key.clone()),
                _ => None,
            })
            .collect()
    }
}

fn upsert(objects: &mut Vec<StoredObject>, object: StoredObject) {
    match objects.iter_mut().find(|o| o.key == object.key) {
        Some(existing) => *existing = object,
        None => objects.push(object),
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> StorageResult<()> {
        let mut inner = self.inner.lock().await;
        inner.calls.push(StorageCall::Put {
            key: key.to_string(),
            content_type: content_type.to_string(),
        });
        if let Some(message) = inner.fail_put.clone() {
            return Err(StorageError::UploadFailed(message));
        }
        upsert(
            &mut inner.objects,
            StoredObject {
                key: key.to_string(),
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn list(&self) -> StorageResult<Vec<String>> {
        let mut inner = self.inner.lock().await;
        inner.calls.push(StorageCall::List);
        if let Some(message) = inner.fail_list.clone() {
            return Err(StorageError::ListFailed(message));
        }
        Ok(inner.objects.iter().map(|o| o.key.clone()).collect())
    }

    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        let mut inner = self.inner.lock().await;
        inner.calls.push(StorageCall::Sign {
            key: key.to_string(),
            expires_in,
        });
        if inner.failing_sign_keys.contains(key) {
            return Err(StorageError::SigningFailed(format!(
                "signing disabled for {}",
                key
            )));
        }
        Ok(format!(
            "memory://{}/{}?expires_in={}",
            self.bucket,
            key,
            expires_in.as_secs()
        ))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let mut inner = self.inner.lock().await;
        inner.calls.push(StorageCall::Delete {
            key: key.to_string(),
        });
        if let Some(message) = inner.fail_delete.clone() {
            return Err(StorageError::DeleteFailed(message));
        }
        inner.objects.retain(|o| o.key != key);
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_list_preserves_insertion_order() {
        let storage = MemoryStorage::new("test");
        storage
            .put("b.pdf", Bytes::from_static(b"%PDF"), "application/pdf")
            .await
            .unwrap();
        storage
            .put("a.pdf", Bytes::from_static(b"%PDF"), "application/pdf")
            .await
            .unwrap();
        assert_eq!(storage.list().await.unwrap(), vec!["b.pdf", "a.pdf"]);
    }

    #[tokio::test]
    async fn put_overwrites_existing_key_in_place() {
        let storage = MemoryStorage::new("test");
        storage.seed("a.pdf", b"old", "application/pdf").await;
        storage.seed("b.pdf", b"x", "application/pdf").await;
        storage
            .put("a.pdf", Bytes::from_static(b"new"), "application/pdf")
            .await
            .unwrap();
        assert_eq!(storage.keys().await, vec!["a.pdf", "b.pdf"]);
        assert_eq!(storage.object("a.pdf").await.unwrap().data, Bytes::from_static(b"new"));
    }

    #[tokio::test]
    async fn injected_sign_failure_only_affects_that_key() {
        let storage = MemoryStorage::new("test");
        storage.fail_signing_for("bad.pdf").await;
        let ttl = Duration::from_secs(60);
        assert!(storage.presigned_get_url("bad.pdf", ttl).await.is_err());
        assert_eq!(
            storage.presigned_get_url("good.pdf", ttl).await.unwrap(),
            "memory://test/good.pdf?expires_in=60"
        );
        assert_eq!(storage.signed_keys().await, vec!["bad.pdf", "good.pdf"]);
    }

    #[tokio::test]
    async fn delete_removes_object_and_records_call() {
        let storage = MemoryStorage::new("test");
        storage.seed("a.pdf", b"x", "application/pdf").await;
        storage.delete("a.pdf").await.unwrap();
        assert!(storage.keys().await.is_empty());
        assert_eq!(
            storage.calls().await,
            vec![StorageCall::Delete {
                key: "a.pdf".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn failed_put_is_recorded_but_not_stored() {
        let storage = MemoryStorage::new("test");
        storage.fail_puts("quota exceeded").await;
        let err = storage
            .put("a.pdf", Bytes::from_static(b"x"), "application/pdf")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
        assert_eq!(storage.put_count().await, 1);
        assert!(storage.keys().await.is_empty());
    }
}
