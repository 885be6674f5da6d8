//! Request payloads for todo operations.
//!
//! Shared between the data-access layer and whatever handler layer sits in
//! front of it. Pure data, no I/O.

use serde::{Deserialize, Serialize};

use super::types::{TodoRecord, TodoUpdate};

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl CreateTodoRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: None,
        }
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Convert into a fully-formed record owned by `user_id`.
    pub fn into_record(self, user_id: impl Into<String>) -> TodoRecord {
        let mut todo = TodoRecord::new(user_id, self.name);
        todo.due_date = self.due_date;
        todo
    }
}

/// Request payload for updating a todo's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub done: bool,
}

impl From<UpdateTodoRequest> for TodoUpdate {
    fn from(req: UpdateTodoRequest) -> Self {
        TodoUpdate {
            name: req.name,
            due_date: req.due_date,
            done: req.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_into_record() {
        let todo = CreateTodoRequest::new("Buy milk")
            .with_due_date("2024-01-01")
            .into_record("u1");

        assert_eq!(todo.user_id, "u1");
        assert_eq!(todo.name, "Buy milk");
        assert_eq!(todo.due_date.as_deref(), Some("2024-01-01"));
        assert!(!todo.done);
        assert!(!todo.todo_id.is_empty());
    }

    #[test]
    fn test_update_request_deserializes_without_due_date() {
        let req: UpdateTodoRequest =
            serde_json::from_str(r#"{"name":"X","done":true}"#).unwrap();
        let update = TodoUpdate::from(req);

        assert_eq!(update.name, "X");
        assert!(update.due_date.is_none());
        assert!(update.done);
    }
}
