//! todos - data-access layer for todo records and their attachments.
//!
//! Records live in a DynamoDB table keyed by `(userId, todoId)`; attachments
//! are uploaded straight to S3 through pre-signed URLs.

pub mod attachments;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod output;
pub mod storage;

pub use config::{Config, ConfigError};
pub use gateway::TodoGateway;
