use async_trait::async_trait;

use crate::todo::{TodoKey, TodoRecord, TodoUpdate};

use super::Result;

/// A single-item update addressed by composite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoChanges {
    /// Replace `name`, `dueDate` and `done`.
    Fields(TodoUpdate),
    /// Replace `attachmentUrl` with the given URL.
    AttachmentUrl(String),
}

/// Storage capability behind the todo gateway.
///
/// Each method maps to exactly one backend request. Implementations must
/// fail updates on a missing key with `RepositoryError::NotFound` and treat
/// deletes of a missing key as success.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Gets every record owned by `user_id`. Order is unspecified.
    async fn query_by_owner(&self, user_id: &str) -> Result<Vec<TodoRecord>>;

    /// Gets the records whose id is `todo_id` through the id index.
    async fn query_by_todo_id(&self, todo_id: &str) -> Result<Vec<TodoRecord>>;

    /// Gets the record stored at exactly `key`.
    async fn get(&self, key: &TodoKey) -> Result<Option<TodoRecord>>;

    /// Writes a record, replacing whatever was stored at its key.
    async fn put(&self, todo: &TodoRecord) -> Result<()>;

    /// Applies `changes` to the record at `key`.
    async fn update(&self, key: &TodoKey, changes: &TodoChanges) -> Result<()>;

    /// Deletes the record at `key`, if any.
    async fn delete(&self, key: &TodoKey) -> Result<()>;
}
