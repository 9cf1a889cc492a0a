use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use chrono::Utc;
use entity::order_request::Image3dMetadata;
use uuid::Uuid;

use crate::{
    model::order::UploadFile,
    server::storage::{object_key, FileStorage, StorageError},
};

/// In-memory attachment store for local development and tests.
///
/// Presigned URLs embed the raw object key so tests can recover it, and
/// deletes can be made to fail on demand to exercise best-effort cleanup.
pub struct MemoryStorage {
    bucket: String,
    objects: Mutex<HashMap<String, Vec<u8>>>,
    fail_deletes: AtomicBool,
}

impl MemoryStorage {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Mutex::new(HashMap::new()),
            fail_deletes: AtomicBool::new(false),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        let objects = self.objects.lock().unwrap_or_else(|err| err.into_inner());
        let mut keys: Vec<String> = objects.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .contains_key(key)
    }

    /// Makes every subsequent `delete` call fail.
    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl FileStorage for MemoryStorage {
    async fn upload(
        &self,
        file: &UploadFile,
        order_id: Uuid,
        patient_id: Uuid,
    ) -> Result<Image3dMetadata, StorageError> {
        let key = object_key(&file.file_name, order_id, patient_id);

        self.objects
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .insert(key.clone(), file.bytes.clone());

        Ok(Image3dMetadata {
            s3_key: key,
            s3_bucket: self.bucket.clone(),
            file_name: file.file_name.clone(),
            file_size: file.bytes.len() as i64,
            content_type: file.content_type.clone(),
            order_id,
            patient_id,
            uploaded_at: Utc::now().to_rfc3339(),
        })
    }

    async fn presigned_url(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        Ok(format!(
            "https://{}.storage.local/{key}?expires={}",
            self.bucket,
            expires_in.as_secs()
        ))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StorageError::Delete {
                key: key.to_string(),
                message: "delete disabled".to_string(),
            });
        }

        self.objects
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .remove(key);

        Ok(())
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
