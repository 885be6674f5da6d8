//! DynamoDB store implementation.
//!
//! Implements `TodoStore` from `todos_core::storage` with one DynamoDB
//! request per operation.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use todos_core::storage::{Result, TodoChanges, TodoStore};
use todos_core::todo::{TodoKey, TodoRecord};

use super::conversions::{item_to_todo, todo_to_item, update_parts};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_update_item_error,
};
use super::keys;
use crate::config::Config;

/// DynamoDB-backed todo store.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
    todo_id_index: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given client, table and id index names.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        todo_id_index: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            todo_id_index: todo_id_index.into(),
        }
    }

    /// Creates a store from loaded configuration.
    pub fn from_config(config: &Config, sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(
            Client::new(sdk_config),
            &config.table_name,
            &config.todo_id_index,
        )
    }
}

#[async_trait]
impl TodoStore for DynamoDbStore {
    async fn query_by_owner(&self, user_id: &str) -> Result<Vec<TodoRecord>> {
        let mut todos = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        // Follow LastEvaluatedKey so large owners are not truncated at 1 MB.
        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#userId = :userId")
                .expression_attribute_names("#userId", keys::USER_ID)
                .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_query_error)?;

            for item in result.items.unwrap_or_default() {
                todos.push(item_to_todo(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(todos)
    }

    async fn query_by_todo_id(&self, todo_id: &str) -> Result<Vec<TodoRecord>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&self.todo_id_index)
            .key_condition_expression("#todoId = :todoId")
            .expression_attribute_names("#todoId", keys::TODO_ID)
            .expression_attribute_values(":todoId", AttributeValue::S(todo_id.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_todo).collect()
    }

    async fn get(&self, key: &TodoKey) -> Result<Option<TodoRecord>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_todo(&item)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, todo: &TodoRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(todo)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update(&self, key: &TodoKey, changes: &TodoChanges) -> Result<()> {
        let parts = update_parts(changes);

        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(key)))
            .update_expression(parts.update_expression)
            .condition_expression(parts.condition_expression)
            .set_expression_attribute_names(Some(parts.names))
            .set_expression_attribute_values(Some(parts.values))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, key.to_string()))?;

        Ok(())
    }

    async fn delete(&self, key: &TodoKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
