//! Blob storage for 3D scan attachments.
//!
//! Uploaded scans are written under a per-patient, per-order prefix and
//! referenced from the order row by object key. Download access goes through
//! short-lived presigned URLs so the bucket itself stays private.

pub mod memory;
pub mod s3;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use entity::order_request::Image3dMetadata;
use thiserror::Error;
use uuid::Uuid;

use crate::model::order::UploadFile;

/// Prefix shared by every 3D scan object key.
pub const SCAN_KEY_PREFIX: &str = "3d-images";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to upload object {key}: {message}")]
    Upload { key: String, message: String },
    #[error("Failed to presign object {key}: {message}")]
    Presign { key: String, message: String },
    #[error("Failed to delete object {key}: {message}")]
    Delete { key: String, message: String },
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Uploads one attachment and returns its stored metadata.
    async fn upload(
        &self,
        file: &UploadFile,
        order_id: Uuid,
        patient_id: Uuid,
    ) -> Result<Image3dMetadata, StorageError>;

    /// Generates a time-limited download URL for an object key.
    async fn presigned_url(&self, key: &str, expires_in: Duration)
        -> Result<String, StorageError>;

    /// Removes an object. Callers treat failures as best-effort.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Name of the backing bucket, recorded in attachment metadata.
    fn bucket(&self) -> &str;
}

/// Replaces any character outside `[a-zA-Z0-9._-]` with an underscore so
/// file names coming from clients cannot break key paths or URLs.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Builds the object key for an attachment:
/// `3d-images/{patient_id}/{order_id}/{millis}_{sanitized_name}`.
pub fn object_key(file_name: &str, order_id: Uuid, patient_id: Uuid) -> String {
    format!(
        "{SCAN_KEY_PREFIX}/{patient_id}/{order_id}/{}_{}",
        Utc::now().timestamp_millis(),
        sanitize_file_name(file_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_disallowed_characters() {
        assert_eq!(
            sanitize_file_name("upper jaw (final).stl"),
            "upper_jaw__final_.stl"
        );
        assert_eq!(sanitize_file_name("scan_01-v2.ply"), "scan_01-v2.ply");
    }

    #[test]
    fn object_key_nests_patient_then_order() {
        let order_id = Uuid::new_v4();
        let patient_id = Uuid::new_v4();

        let key = object_key("molar scan.stl", order_id, patient_id);

        assert!(key.starts_with(&format!("{SCAN_KEY_PREFIX}/{patient_id}/{order_id}/")));
        assert!(key.ends_with("_molar_scan.stl"));
    }
}
