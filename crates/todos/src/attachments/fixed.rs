//! Deterministic signer for tests and local runs.

use std::time::Duration;

use async_trait::async_trait;

use todos_core::attachment::UploadSigner;
use todos_core::storage::{RepositoryError, Result};

/// Produces `<base>/<key>?X-Amz-Expires=<secs>&X-Amz-Signature=fixed`.
///
/// No credentials and no network. A rejecting signer fails every request,
/// which lets callers exercise the signing error path.
#[derive(Debug, Clone)]
pub struct FixedUrlSigner {
    base_url: String,
    reject: bool,
}

impl FixedUrlSigner {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            reject: false,
        }
    }

    /// A signer whose every presign call fails.
    pub fn rejecting(base_url: impl Into<String>) -> Self {
        Self {
            reject: true,
            ..Self::new(base_url)
        }
    }
}

#[async_trait]
impl UploadSigner for FixedUrlSigner {
    async fn presign_put(&self, key: &str, expires_in: Duration) -> Result<String> {
        if self.reject {
            return Err(RepositoryError::Presign(format!(
                "signing disabled for {}",
                self.base_url
            )));
        }
        Ok(format!(
            "{}?X-Amz-Expires={}&X-Amz-Signature=fixed",
            self.object_url(key),
            expires_in.as_secs()
        ))
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_presign_put() {
        let signer = FixedUrlSigner::new("https://bucket.example/");
        let url = signer
            .presign_put("t1", Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(
            url,
            "https://bucket.example/t1?X-Amz-Expires=60&X-Amz-Signature=fixed"
        );
    }

    #[tokio::test]
    async fn test_rejecting() {
        let signer = FixedUrlSigner::rejecting("https://bucket.example");
        let result = signer.presign_put("t1", Duration::from_secs(60)).await;

        assert!(matches!(result, Err(RepositoryError::Presign(_))));
    }
}
