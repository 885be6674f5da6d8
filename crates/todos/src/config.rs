use std::{env, time::Duration};

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Data-access configuration loaded from environment variables.
///
/// Read once at startup and handed to constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding todo records (default: "todos")
    pub table_name: String,
    /// Secondary index keyed by todo id (default: "TodoIdIndex")
    pub todo_id_index: String,
    /// S3 bucket receiving attachments (required)
    pub attachment_bucket: String,
    /// Lifetime of signed upload URLs in seconds (default: 300)
    pub signed_url_expiration_seconds: u64,
    /// Custom endpoint URL (for local DynamoDB/S3)
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODOS_TABLE` - Table name (default: "todos")
    /// - `TODOS_CREATED_AT_INDEX` - Id index name (default: "TodoIdIndex")
    /// - `ATTACHMENT_S3_BUCKET` - Attachment bucket (required)
    /// - `SIGNED_URL_EXPIRATION` - Signed URL lifetime in seconds (default: 300)
    /// - `AWS_ENDPOINT_URL` - Custom endpoint (optional)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let signed_url_expiration_seconds = match lookup("SIGNED_URL_EXPIRATION") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "SIGNED_URL_EXPIRATION",
                value,
            })?,
            None => 300,
        };

        Ok(Self {
            table_name: lookup("TODOS_TABLE").unwrap_or_else(|| "todos".to_string()),
            todo_id_index: lookup("TODOS_CREATED_AT_INDEX")
                .unwrap_or_else(|| "TodoIdIndex".to_string()),
            attachment_bucket: lookup("ATTACHMENT_S3_BUCKET")
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing("ATTACHMENT_S3_BUCKET"))?,
            signed_url_expiration_seconds,
            endpoint_url: lookup("AWS_ENDPOINT_URL"),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
        })
    }

    /// Get the signed URL lifetime as a Duration.
    pub fn signed_url_expiration(&self) -> Duration {
        Duration::from_secs(self.signed_url_expiration_seconds)
    }

    /// Loads the shared AWS SDK configuration for this region/endpoint.
    #[cfg(any(feature = "dynamodb", feature = "s3"))]
    pub async fn load_aws(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(self.region.clone()));

        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        loader.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[("ATTACHMENT_S3_BUCKET", "attachments")]))
            .unwrap();

        assert_eq!(config.table_name, "todos");
        assert_eq!(config.todo_id_index, "TodoIdIndex");
        assert_eq!(config.attachment_bucket, "attachments");
        assert_eq!(config.signed_url_expiration_seconds, 300);
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn test_all_values() {
        let config = Config::from_lookup(lookup(&[
            ("TODOS_TABLE", "Todos-dev"),
            ("TODOS_CREATED_AT_INDEX", "CreatedAtIndex"),
            ("ATTACHMENT_S3_BUCKET", "attachments-dev"),
            ("SIGNED_URL_EXPIRATION", "60"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
            ("AWS_REGION", "eu-west-1"),
        ]))
        .unwrap();

        assert_eq!(config.table_name, "Todos-dev");
        assert_eq!(config.todo_id_index, "CreatedAtIndex");
        assert_eq!(config.signed_url_expiration(), Duration::from_secs(60));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.region, "eu-west-1");
    }

    #[test]
    fn test_missing_bucket() {
        assert_eq!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("ATTACHMENT_S3_BUCKET"))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("ATTACHMENT_S3_BUCKET", "")])),
            Err(ConfigError::Missing("ATTACHMENT_S3_BUCKET"))
        );
    }

    #[test]
    fn test_invalid_expiration() {
        let err = Config::from_lookup(lookup(&[
            ("ATTACHMENT_S3_BUCKET", "attachments"),
            ("SIGNED_URL_EXPIRATION", "five minutes"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "SIGNED_URL_EXPIRATION",
                value: "five minutes".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid value for SIGNED_URL_EXPIRATION: five minutes"
        );
    }
}
