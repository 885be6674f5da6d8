//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! domain types, and for shaping update requests. Testable without DynamoDB
//! access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todos_core::storage::{RepositoryError, TodoChanges};
use todos_core::todo::TodoRecord;

use super::keys::{self, name_placeholder, value_placeholder};

// ============================================================================
// Record conversions
// ============================================================================

/// Convert a TodoRecord to a DynamoDB item.
///
/// Absent optional fields are left out of the item rather than stored as NULL.
pub fn todo_to_item(todo: &TodoRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        keys::USER_ID.to_string(),
        AttributeValue::S(todo.user_id.clone()),
    );
    item.insert(
        keys::TODO_ID.to_string(),
        AttributeValue::S(todo.todo_id.clone()),
    );

    // Data
    item.insert(keys::NAME.to_string(), AttributeValue::S(todo.name.clone()));
    item.insert(keys::DONE.to_string(), AttributeValue::Bool(todo.done));
    item.insert(
        keys::CREATED_AT.to_string(),
        AttributeValue::S(todo.created_at.clone()),
    );

    if let Some(due_date) = &todo.due_date {
        item.insert(
            keys::DUE_DATE.to_string(),
            AttributeValue::S(due_date.clone()),
        );
    }
    if let Some(url) = &todo.attachment_url {
        item.insert(
            keys::ATTACHMENT_URL.to_string(),
            AttributeValue::S(url.clone()),
        );
    }

    item
}

/// Convert a DynamoDB item to a TodoRecord.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<TodoRecord, RepositoryError> {
    Ok(TodoRecord {
        todo_id: get_string(item, keys::TODO_ID)?,
        user_id: get_string(item, keys::USER_ID)?,
        name: get_string(item, keys::NAME)?,
        due_date: get_optional_string(item, keys::DUE_DATE),
        done: get_bool(item, keys::DONE)?,
        created_at: get_string(item, keys::CREATED_AT)?,
        attachment_url: get_optional_string(item, keys::ATTACHMENT_URL),
    })
}

// ============================================================================
// Update requests
// ============================================================================

/// The expression parts of an UpdateItem request.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParts {
    pub update_expression: String,
    pub condition_expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Shape an UpdateItem request for `changes`.
///
/// Every update is conditioned on the record existing, so an update on a
/// missing key fails instead of creating a partial item. A `None` due date
/// is removed rather than written as NULL.
pub fn update_parts(changes: &TodoChanges) -> UpdateParts {
    let mut parts = UpdateParts {
        update_expression: String::new(),
        condition_expression: format!("attribute_exists({})", name_placeholder(keys::TODO_ID)),
        names: HashMap::from([(name_placeholder(keys::TODO_ID), keys::TODO_ID.to_string())]),
        values: HashMap::new(),
    };
    let mut set_clauses = Vec::new();
    let mut remove_clauses = Vec::new();

    match changes {
        TodoChanges::Fields(update) => {
            set_clauses.push(parts.set(keys::NAME, AttributeValue::S(update.name.clone())));
            match &update.due_date {
                Some(due_date) => set_clauses
                    .push(parts.set(keys::DUE_DATE, AttributeValue::S(due_date.clone()))),
                None => remove_clauses.push(parts.name(keys::DUE_DATE)),
            }
            set_clauses.push(parts.set(keys::DONE, AttributeValue::Bool(update.done)));
        }
        TodoChanges::AttachmentUrl(url) => {
            set_clauses.push(parts.set(keys::ATTACHMENT_URL, AttributeValue::S(url.clone())));
        }
    }

    parts.update_expression = format!("SET {}", set_clauses.join(", "));
    if !remove_clauses.is_empty() {
        parts
            .update_expression
            .push_str(&format!(" REMOVE {}", remove_clauses.join(", ")));
    }

    parts
}

impl UpdateParts {
    /// Register an attribute name and return its placeholder.
    fn name(&mut self, attribute: &str) -> String {
        let placeholder = name_placeholder(attribute);
        self.names.insert(placeholder.clone(), attribute.to_string());
        placeholder
    }

    /// Register an attribute name and value, returning the `#a = :a` clause.
    fn set(&mut self, attribute: &str, value: AttributeValue) -> String {
        let name = self.name(attribute);
        let placeholder = value_placeholder(attribute);
        self.values.insert(placeholder.clone(), value);
        format!("{name} = {placeholder}")
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use todos_core::todo::TodoUpdate;

    fn sample_todo() -> TodoRecord {
        TodoRecord::new("u1", "Buy milk")
            .with_id("t1")
            .with_created_at("2024-01-01T00:00:00Z")
    }

    #[test]
    fn test_todo_item_has_key_attributes() {
        let item = todo_to_item(&sample_todo());

        assert_eq!(item.get("userId").unwrap().as_s().unwrap(), "u1");
        assert_eq!(item.get("todoId").unwrap().as_s().unwrap(), "t1");
        assert_eq!(
            item.get("createdAt").unwrap().as_s().unwrap(),
            "2024-01-01T00:00:00Z"
        );
        assert_eq!(item.get("done").unwrap().as_bool().unwrap(), &false);
    }

    #[test]
    fn test_todo_item_omits_absent_optionals() {
        let item = todo_to_item(&sample_todo());

        assert!(!item.contains_key("dueDate"));
        assert!(!item.contains_key("attachmentUrl"));
    }

    #[test]
    fn test_todo_round_trip_with_optionals() {
        let todo = sample_todo()
            .with_due_date("2024-02-01")
            .with_done(true)
            .with_attachment_url("https://bucket.example/t1");

        assert_eq!(item_to_todo(&todo_to_item(&todo)).unwrap(), todo);
    }

    #[test]
    fn test_item_to_todo_missing_field() {
        let mut item = todo_to_item(&sample_todo());
        item.remove("name");

        assert_eq!(
            item_to_todo(&item),
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: name".to_string()
            ))
        );
    }

    #[test]
    fn test_item_to_todo_mistyped_done() {
        let mut item = todo_to_item(&sample_todo());
        item.insert("done".to_string(), AttributeValue::S("true".to_string()));

        assert!(item_to_todo(&item).is_err());
    }

    #[test]
    fn test_update_parts_fields() {
        let parts = update_parts(&TodoChanges::Fields(TodoUpdate {
            name: "X".to_string(),
            due_date: Some("2024-01-01".to_string()),
            done: true,
        }));

        assert_eq!(
            parts.update_expression,
            "SET #name = :name, #dueDate = :dueDate, #done = :done"
        );
        assert_eq!(parts.condition_expression, "attribute_exists(#todoId)");
        assert_eq!(parts.names.get("#name").unwrap(), "name");
        assert_eq!(parts.names.get("#todoId").unwrap(), "todoId");
        assert_eq!(parts.values.get(":name").unwrap().as_s().unwrap(), "X");
        assert_eq!(
            parts.values.get(":dueDate").unwrap().as_s().unwrap(),
            "2024-01-01"
        );
        assert_eq!(parts.values.get(":done").unwrap().as_bool().unwrap(), &true);
        assert_eq!(parts.values.len(), 3);
    }

    #[test]
    fn test_update_parts_removes_missing_due_date() {
        let parts = update_parts(&TodoChanges::Fields(TodoUpdate {
            name: "X".to_string(),
            due_date: None,
            done: false,
        }));

        assert_eq!(
            parts.update_expression,
            "SET #name = :name, #done = :done REMOVE #dueDate"
        );
        assert_eq!(parts.names.get("#dueDate").unwrap(), "dueDate");
        assert!(!parts.values.contains_key(":dueDate"));
    }

    #[test]
    fn test_update_parts_attachment_url() {
        let parts = update_parts(&TodoChanges::AttachmentUrl(
            "https://bucket.example/imgX".to_string(),
        ));

        assert_eq!(parts.update_expression, "SET #attachmentUrl = :attachmentUrl");
        assert_eq!(parts.names.len(), 2);
        assert_eq!(
            parts.values.get(":attachmentUrl").unwrap().as_s().unwrap(),
            "https://bucket.example/imgX"
        );
    }
}
