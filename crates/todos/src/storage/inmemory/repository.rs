//! In-memory store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{RepositoryError, Result, TodoChanges, TodoStore};
use todos_core::todo::{TodoKey, TodoRecord};

/// In-memory storage backend for testing.
///
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    todos: Arc<RwLock<BTreeMap<TodoKey, TodoRecord>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    async fn query_by_owner(&self, user_id: &str) -> Result<Vec<TodoRecord>> {
        let todos = self.todos.read().await;
        Ok(todos
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn query_by_todo_id(&self, todo_id: &str) -> Result<Vec<TodoRecord>> {
        let todos = self.todos.read().await;
        Ok(todos
            .values()
            .filter(|t| t.todo_id == todo_id)
            .cloned()
            .collect())
    }

    async fn get(&self, key: &TodoKey) -> Result<Option<TodoRecord>> {
        let todos = self.todos.read().await;
        Ok(todos.get(key).cloned())
    }

    async fn put(&self, todo: &TodoRecord) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.insert(todo.key(), todo.clone());
        Ok(())
    }

    async fn update(&self, key: &TodoKey, changes: &TodoChanges) -> Result<()> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(key).ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Todo",
            id: key.to_string(),
        })?;

        match changes {
            TodoChanges::Fields(update) => todo.apply(update),
            TodoChanges::AttachmentUrl(url) => todo.attachment_url = Some(url.clone()),
        }
        Ok(())
    }

    async fn delete(&self, key: &TodoKey) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todos_core::todo::TodoUpdate;

    fn todo(todo_id: &str, user_id: &str) -> TodoRecord {
        TodoRecord::new(user_id, "Buy milk")
            .with_id(todo_id)
            .with_created_at("2024-01-01T00:00:00Z")
    }

    #[tokio::test]
    async fn test_query_by_owner_filters() {
        let store = InMemoryStore::new();
        store.put(&todo("t1", "u1")).await.unwrap();
        store.put(&todo("t2", "u1")).await.unwrap();
        store.put(&todo("t3", "u2")).await.unwrap();

        let todos = store.query_by_owner("u1").await.unwrap();
        assert_eq!(todos.len(), 2);
        assert!(todos.iter().all(|t| t.user_id == "u1"));
        assert!(store.query_by_owner("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_by_todo_id_ignores_owner() {
        let store = InMemoryStore::new();
        store.put(&todo("t1", "u1")).await.unwrap();
        store.put(&todo("t2", "u2")).await.unwrap();

        let todos = store.query_by_todo_id("t2").await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].user_id, "u2");
    }

    #[tokio::test]
    async fn test_get_requires_exact_key() {
        let store = InMemoryStore::new();
        store.put(&todo("t1", "u1")).await.unwrap();

        assert!(store.get(&TodoKey::new("t1", "u1")).await.unwrap().is_some());
        assert!(store.get(&TodoKey::new("t1", "u2")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_key_is_not_found() {
        let store = InMemoryStore::new();
        let result = store
            .update(
                &TodoKey::new("t1", "u1"),
                &TodoChanges::Fields(TodoUpdate {
                    name: "X".to_string(),
                    due_date: None,
                    done: true,
                }),
            )
            .await;

        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                entity_type: "Todo",
                id: "u1/t1".to_string(),
            })
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_attachment_url() {
        let store = InMemoryStore::new();
        store.put(&todo("t1", "u1")).await.unwrap();

        store
            .update(
                &TodoKey::new("t1", "u1"),
                &TodoChanges::AttachmentUrl("https://bucket.example/t1".to_string()),
            )
            .await
            .unwrap();

        let stored = store.get(&TodoKey::new("t1", "u1")).await.unwrap().unwrap();
        assert_eq!(
            stored.attachment_url.as_deref(),
            Some("https://bucket.example/t1")
        );
    }

    #[tokio::test]
    async fn test_delete_missing_key_succeeds() {
        let store = InMemoryStore::new();
        assert!(store.delete(&TodoKey::new("t1", "u1")).await.is_ok());
    }
}
