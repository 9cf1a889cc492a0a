use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{presigning::PresigningConfig, primitives::ByteStream, Client};
use chrono::Utc;
use entity::order_request::Image3dMetadata;
use uuid::Uuid;

use crate::{
    model::order::UploadFile,
    server::storage::{object_key, FileStorage, StorageError},
};

/// S3-backed attachment store. This is the production driver.
pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl FileStorage for S3Storage {
    async fn upload(
        &self,
        file: &UploadFile,
        order_id: Uuid,
        patient_id: Uuid,
    ) -> Result<Image3dMetadata, StorageError> {
        let key = object_key(&file.file_name, order_id, patient_id);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(&file.content_type)
            .body(ByteStream::from(file.bytes.clone()))
            .send()
            .await
            .map_err(|err| StorageError::Upload {
                key: key.clone(),
                message: err.to_string(),
            })?;

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
        let config =
            PresigningConfig::expires_in(expires_in).map_err(|err| StorageError::Presign {
                key: key.to_string(),
                message: err.to_string(),
            })?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(config)
            .await
            .map_err(|err| StorageError::Presign {
                key: key.to_string(),
                message: err.to_string(),
            })?;

        Ok(presigned.uri().to_string())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| StorageError::Delete {
                key: key.to_string(),
                message: err.to_string(),
            })?;

        Ok(())
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
