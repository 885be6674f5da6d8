//! Attachment URL derivation.
//!
//! Pure functions: a signed write URL is turned into the plain read URL that
//! gets stored on the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of generating an upload target for a todo's attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTarget {
    /// Pre-signed PUT URL handed to the client.
    pub upload_url: String,
    /// Plain read URL persisted as the record's `attachmentUrl`.
    pub attachment_url: String,
    pub expires_at: DateTime<Utc>,
}

impl UploadTarget {
    /// Builds a target from a signed URL, deriving the read URL from it.
    pub fn new(upload_url: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        let upload_url = upload_url.into();
        let attachment_url = read_url(&upload_url).to_string();
        Self {
            upload_url,
            attachment_url,
            expires_at,
        }
    }
}

/// Returns everything before the first `?` of a signed URL.
///
/// A URL without a query string is returned unchanged.
pub fn read_url(signed_url: &str) -> &str {
    signed_url
        .split_once('?')
        .map_or(signed_url, |(base, _)| base)
}

/// Public virtual-hosted URL of an object in a bucket.
///
/// Pattern: `https://<bucket>.s3.amazonaws.com/<key>`
pub fn bucket_object_url(bucket: &str, key: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{key}")
}

/// Public path-style URL of an object behind a custom endpoint.
///
/// Pattern: `<endpoint>/<bucket>/<key>`
pub fn endpoint_object_url(endpoint: &str, bucket: &str, key: &str) -> String {
    format!("{}/{bucket}/{key}", endpoint.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNED: &str = "https://attachments.s3.amazonaws.com/t1?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Expires=300&X-Amz-Signature=abc";

    #[test]
    fn test_read_url_strips_query_string() {
        assert_eq!(read_url(SIGNED), "https://attachments.s3.amazonaws.com/t1");
    }

    #[test]
    fn test_read_url_without_query_is_unchanged() {
        assert_eq!(
            read_url("https://attachments.s3.amazonaws.com/t1"),
            "https://attachments.s3.amazonaws.com/t1"
        );
    }

    #[test]
    fn test_read_url_splits_on_first_separator() {
        assert_eq!(read_url("https://a.example/k?x=1?y=2"), "https://a.example/k");
    }

    #[test]
    fn test_upload_target_keeps_signed_url() {
        let expires_at = DateTime::parse_from_rfc3339("2024-01-01T00:05:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let target = UploadTarget::new(SIGNED, expires_at);

        assert_eq!(target.upload_url, SIGNED);
        assert_eq!(
            target.attachment_url,
            "https://attachments.s3.amazonaws.com/t1"
        );
        assert_eq!(target.expires_at, expires_at);
    }

    #[test]
    fn test_bucket_object_url() {
        assert_eq!(
            bucket_object_url("attachments", "img-42"),
            "https://attachments.s3.amazonaws.com/img-42"
        );
    }

    #[test]
    fn test_endpoint_object_url() {
        assert_eq!(
            endpoint_object_url("http://localhost:4566/", "attachments", "img-42"),
            "http://localhost:4566/attachments/img-42"
        );
    }
}
