//! DynamoDB attribute names and key construction.
//!
//! Pure functions, no side effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todos_core::todo::TodoKey;

pub const TODO_ID: &str = "todoId";
pub const USER_ID: &str = "userId";
pub const NAME: &str = "name";
pub const DUE_DATE: &str = "dueDate";
pub const DONE: &str = "done";
pub const CREATED_AT: &str = "createdAt";
pub const ATTACHMENT_URL: &str = "attachmentUrl";

/// Entity name used in `NotFound` errors.
pub const ENTITY_TYPE_TODO: &str = "Todo";

/// Generate the primary key map for a record.
///
/// Pattern: `{ userId: S, todoId: S }`
pub fn primary_key(key: &TodoKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (USER_ID.to_string(), AttributeValue::S(key.user_id.clone())),
        (TODO_ID.to_string(), AttributeValue::S(key.todo_id.clone())),
    ])
}

/// Expression placeholder for an attribute name (`#name`).
pub fn name_placeholder(attribute: &str) -> String {
    format!("#{attribute}")
}

/// Expression placeholder for an attribute value (`:name`).
pub fn value_placeholder(attribute: &str) -> String {
    format!(":{attribute}")
}
