use std::time::Duration;

use async_trait::async_trait;

use crate::storage::Result;

/// Object-store capability used for attachment uploads.
#[async_trait]
pub trait UploadSigner: Send + Sync {
    /// Returns a pre-signed PUT URL for `key`, valid for `expires_in`.
    async fn presign_put(&self, key: &str, expires_in: Duration) -> Result<String>;

    /// Returns the public read URL of the object stored under `key`.
    fn object_url(&self, key: &str) -> String;
}
