//! S3 upload signer.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;

use todos_core::attachment::{bucket_object_url, endpoint_object_url, UploadSigner};
use todos_core::storage::{RepositoryError, Result};

use crate::config::Config;

/// Signs PUT requests against a single attachment bucket.
///
/// Object URLs follow the client's addressing: virtual-hosted on AWS,
/// path-style under a custom endpoint.
#[derive(Debug, Clone)]
pub struct S3Signer {
    client: Client,
    bucket: String,
    endpoint_url: Option<String>,
}

impl S3Signer {
    /// Creates a signer for a client using virtual-hosted AWS addressing.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            endpoint_url: None,
        }
    }

    /// Uses path-style object URLs under `endpoint_url`.
    ///
    /// The client must be built with the same endpoint and `force_path_style`.
    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Creates a signer from loaded configuration.
    ///
    /// Custom endpoints (LocalStack, MinIO) get path-style addressing.
    pub fn from_config(config: &Config, sdk_config: &aws_config::SdkConfig) -> Self {
        let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
            .force_path_style(config.endpoint_url.is_some())
            .build();

        let signer = Self::new(Client::from_conf(s3_config), &config.attachment_bucket);
        match &config.endpoint_url {
            Some(endpoint) => signer.with_endpoint(endpoint),
            None => signer,
        }
    }
}

#[async_trait]
impl UploadSigner for S3Signer {
    async fn presign_put(&self, key: &str, expires_in: Duration) -> Result<String> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| RepositoryError::Presign(e.to_string()))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| RepositoryError::Presign(DisplayErrorContext(&e).to_string()))?;

        Ok(request.uri().to_string())
    }

    fn object_url(&self, key: &str) -> String {
        match &self.endpoint_url {
            Some(endpoint) => endpoint_object_url(endpoint, &self.bucket, key),
            None => bucket_object_url(&self.bucket, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
    use todos_core::attachment::read_url;

    const LOCAL_ENDPOINT: &str = "http://localhost:4566";

    fn offline_config() -> aws_sdk_s3::config::Builder {
        aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("AKIDEXAMPLE", "secret", None, None, "test"))
    }

    fn offline_signer() -> S3Signer {
        S3Signer::new(Client::from_conf(offline_config().build()), "attachments")
    }

    fn local_signer() -> S3Signer {
        let config = offline_config()
            .endpoint_url(LOCAL_ENDPOINT)
            .force_path_style(true)
            .build();
        S3Signer::new(Client::from_conf(config), "attachments").with_endpoint(LOCAL_ENDPOINT)
    }

    #[tokio::test]
    async fn test_presign_put_is_local_and_carries_query() {
        let signer = offline_signer();
        let url = signer
            .presign_put("t1", Duration::from_secs(300))
            .await
            .unwrap();

        let (base, query) = url.split_once('?').unwrap();
        assert!(base.starts_with("https://attachments.s3."));
        assert!(base.ends_with(".amazonaws.com/t1"));
        assert!(query.contains("X-Amz-Expires=300"));
        assert!(query.contains("X-Amz-Signature="));
    }

    #[tokio::test]
    async fn test_presign_rejects_expiration_over_a_week() {
        let signer = offline_signer();
        let result = signer
            .presign_put("t1", Duration::from_secs(8 * 24 * 60 * 60))
            .await;

        assert!(matches!(result, Err(RepositoryError::Presign(_))));
    }

    #[test]
    fn test_object_url() {
        assert_eq!(
            offline_signer().object_url("img-42"),
            "https://attachments.s3.amazonaws.com/img-42"
        );
    }

    #[tokio::test]
    async fn test_custom_endpoint_read_url_matches_object_url() {
        let signer = local_signer();
        let url = signer
            .presign_put("t1", Duration::from_secs(300))
            .await
            .unwrap();

        assert_eq!(read_url(&url), "http://localhost:4566/attachments/t1");
        assert_eq!(read_url(&url), signer.object_url("t1"));
    }
}
