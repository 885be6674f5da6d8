use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item owned by a user.
///
/// `todo_id` is globally unique, not just unique per owner: the id index
/// resolves a record from its id alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    pub todo_id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub done: bool,
    /// RFC 3339 creation timestamp. Sort key of the id index.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl TodoRecord {
    /// Creates a new, not-done record with a fresh id and the current time.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            todo_id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            name: name.into(),
            due_date: None,
            done: false,
            created_at: Utc::now().to_rfc3339(),
            attachment_url: None,
        }
    }

    /// Sets a specific id (useful for testing).
    pub fn with_id(mut self, todo_id: impl Into<String>) -> Self {
        self.todo_id = todo_id.into();
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Sets a specific creation timestamp (useful for testing).
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    pub fn with_attachment_url(mut self, url: impl Into<String>) -> Self {
        self.attachment_url = Some(url.into());
        self
    }

    /// Returns the composite key of this record.
    pub fn key(&self) -> TodoKey {
        TodoKey::new(&self.todo_id, &self.user_id)
    }

    /// Applies a field update in place, leaving every other field untouched.
    pub fn apply(&mut self, update: &TodoUpdate) {
        self.name = update.name.clone();
        self.due_date = update.due_date.clone();
        self.done = update.done;
    }
}

/// Composite key `(todoId, userId)` addressing exactly one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoKey {
    pub todo_id: String,
    pub user_id: String,
}

impl TodoKey {
    pub fn new(todo_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            todo_id: todo_id.into(),
            user_id: user_id.into(),
        }
    }
}

impl std::fmt::Display for TodoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.user_id, self.todo_id)
    }
}

/// The mutable fields replaced by an update-fields call.
///
/// All three are written; a `None` due date clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    pub name: String,
    #[serde(default)]
    pub due_date: Option<String>,
    pub done: bool,
}
