//! Reconciliation of stored 3D attachments against a client keep-list.
//!
//! Clients send back the URLs of attachments they want to keep. URLs may be
//! presigned, path-style, or bare keys, so each one is normalized down to the
//! object key and compared by exact key identity.

use std::collections::HashSet;

use entity::order_request::Image3dMetadata;
use url::Url;

/// Normalizes a presigned URL, path-style URL, or bare key to the object key.
///
/// Query strings are dropped and a leading `{bucket}/` path segment is
/// stripped. Keys contain only sanitized characters, so no percent-decoding
/// is needed.
pub fn extract_key(url_or_key: &str, bucket: &str) -> String {
    let path = match Url::parse(url_or_key) {
        Ok(url) => url.path().trim_start_matches('/').to_string(),
        Err(_) => url_or_key
            .split('?')
            .next()
            .unwrap_or(url_or_key)
            .trim_start_matches('/')
            .to_string(),
    };

    match path.strip_prefix(&format!("{bucket}/")) {
        Some(key) => key.to_string(),
        None => path,
    }
}

pub struct Reconciliation {
    pub retained: Vec<Image3dMetadata>,
    pub removed: Vec<Image3dMetadata>,
}

/// Splits the current attachment list into entries kept by the client and
/// entries to remove.
pub fn partition_retained(
    current: Vec<Image3dMetadata>,
    kept_urls: &[String],
    bucket: &str,
) -> Reconciliation {
    let kept_keys: HashSet<String> = kept_urls
        .iter()
        .map(|url| extract_key(url, bucket))
        .collect();

    let (retained, removed) = current
        .into_iter()
        .partition(|attachment| kept_keys.contains(&attachment.s3_key));

    Reconciliation { retained, removed }
}
