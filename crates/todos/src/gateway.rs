//! Todo records gateway.
//!
//! A typed façade over the injected store and signer. Every operation is a
//! single request against the backend except `generate_upload_target`, which
//! signs and then persists in two independent calls.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use todos_core::attachment::{UploadSigner, UploadTarget};
use todos_core::storage::{RepositoryError, Result, TodoChanges, TodoStore};
use todos_core::todo::{TodoKey, TodoRecord, TodoUpdate};

/// Data-access entry point for todo records and their attachments.
#[derive(Clone)]
pub struct TodoGateway {
    store: Arc<dyn TodoStore>,
    signer: Arc<dyn UploadSigner>,
    url_expiration: Duration,
}

impl TodoGateway {
    /// Creates a gateway over the given store and signer.
    ///
    /// `url_expiration` bounds the lifetime of generated upload URLs.
    pub fn new(
        store: Arc<dyn TodoStore>,
        signer: Arc<dyn UploadSigner>,
        url_expiration: Duration,
    ) -> Self {
        Self {
            store,
            signer,
            url_expiration,
        }
    }

    /// Creates a gateway backed by DynamoDB and S3 from loaded configuration.
    #[cfg(all(feature = "dynamodb", feature = "s3"))]
    pub async fn from_config(config: &crate::config::Config) -> Self {
        let sdk_config = config.load_aws().await;
        let store = crate::storage::DynamoDbStore::from_config(config, &sdk_config);
        let signer = crate::attachments::S3Signer::from_config(config, &sdk_config);

        tracing::debug!(
            table = %config.table_name,
            index = %config.todo_id_index,
            bucket = %config.attachment_bucket,
            "Initialized todo gateway"
        );

        Self::new(
            Arc::new(store),
            Arc::new(signer),
            config.signed_url_expiration(),
        )
    }

    /// Lists every todo owned by `user_id`, in no particular order.
    pub async fn list_by_owner(&self, user_id: &str) -> Result<Vec<TodoRecord>> {
        tracing::info!(user_id, "Getting all user todos");

        let todos = self.store.query_by_owner(user_id).await?;
        tracing::debug!(user_id, count = todos.len(), "Fetched user todos");
        Ok(todos)
    }

    /// Finds a todo by id alone through the id index.
    ///
    /// Returns `None` when no record has this id. Ids are globally unique;
    /// if the index ever returns several matches the first one wins.
    pub async fn find_by_id(&self, todo_id: &str) -> Result<Option<TodoRecord>> {
        tracing::info!(todo_id, "Getting todo by id");

        let mut todos = self.store.query_by_todo_id(todo_id).await?;
        if todos.len() > 1 {
            tracing::warn!(
                todo_id,
                matches = todos.len(),
                "Todo id is not unique, returning first match"
            );
        }
        Ok(if todos.is_empty() {
            None
        } else {
            Some(todos.swap_remove(0))
        })
    }

    /// Checks whether a record exists under exactly `(todo_id, user_id)`.
    pub async fn exists_for_owner(&self, todo_id: &str, user_id: &str) -> Result<bool> {
        tracing::info!(todo_id, user_id, "Checking todo ownership");

        let key = TodoKey::new(todo_id, user_id);
        Ok(self.store.get(&key).await?.is_some())
    }

    /// Stores a fully-formed record and echoes it back.
    ///
    /// Unconditional: an existing record with the same key is overwritten.
    pub async fn create(&self, todo: TodoRecord) -> Result<TodoRecord> {
        tracing::info!(todo_id = %todo.todo_id, user_id = %todo.user_id, "Creating todo");

        self.store.put(&todo).await?;
        Ok(todo)
    }

    /// Replaces `name`, `dueDate` and `done` of an existing record.
    ///
    /// Fails with `RepositoryError::NotFound` if the key is not stored.
    pub async fn update_fields(
        &self,
        todo_id: &str,
        user_id: &str,
        update: &TodoUpdate,
    ) -> Result<()> {
        tracing::info!(todo_id, user_id, "Updating todo");

        let key = TodoKey::new(todo_id, user_id);
        self.store
            .update(&key, &TodoChanges::Fields(update.clone()))
            .await
    }

    /// Overwrites `attachmentUrl` with the given URL.
    pub async fn update_attachment_reference(
        &self,
        todo_id: &str,
        user_id: &str,
        attachment_url: &str,
    ) -> Result<()> {
        tracing::info!(todo_id, user_id, "Updating todo attachment url");

        let key = TodoKey::new(todo_id, user_id);
        self.store
            .update(&key, &TodoChanges::AttachmentUrl(attachment_url.to_string()))
            .await
    }

    /// Generates a pre-signed upload URL for the todo's attachment.
    ///
    /// The object key is the todo id. Two independent steps:
    ///
    /// 1. sign a PUT URL valid for the configured expiration;
    /// 2. persist its read URL (query string stripped) as `attachmentUrl`.
    ///
    /// The read URL is stored before any upload happens, so it may point to
    /// an object that does not exist yet. If step 2 fails the signed URL is
    /// discarded and the error is returned; nothing is rolled back.
    pub async fn generate_upload_target(
        &self,
        todo_id: &str,
        user_id: &str,
    ) -> Result<UploadTarget> {
        tracing::info!(todo_id, user_id, "Generating upload url");

        let lifetime = chrono::Duration::from_std(self.url_expiration)
            .map_err(|e| RepositoryError::Presign(e.to_string()))?;
        let expires_at = Utc::now().checked_add_signed(lifetime).ok_or_else(|| {
            RepositoryError::Presign(format!(
                "Upload url lifetime out of range: {}s",
                self.url_expiration.as_secs()
            ))
        })?;

        let upload_url = self.signer.presign_put(todo_id, self.url_expiration).await?;
        let target = UploadTarget::new(upload_url, expires_at);

        let key = TodoKey::new(todo_id, user_id);
        if let Err(err) = self
            .store
            .update(
                &key,
                &TodoChanges::AttachmentUrl(target.attachment_url.clone()),
            )
            .await
        {
            tracing::warn!(
                todo_id,
                user_id,
                error = %err,
                "Upload url signed but attachment url not persisted"
            );
            return Err(err);
        }

        Ok(target)
    }

    /// Stores the public URL of an already-uploaded object as `attachmentUrl`.
    pub async fn persist_attachment_reference(
        &self,
        todo_id: &str,
        user_id: &str,
        object_key: &str,
    ) -> Result<()> {
        tracing::info!(todo_id, user_id, object_key, "Persisting attachment url");

        let url = self.signer.object_url(object_key);
        let key = TodoKey::new(todo_id, user_id);
        self.store
            .update(&key, &TodoChanges::AttachmentUrl(url))
            .await
    }

    /// Deletes the record at `(todo_id, user_id)`. Missing keys are not an error.
    pub async fn delete(&self, todo_id: &str, user_id: &str) -> Result<()> {
        tracing::info!(todo_id, user_id, "Deleting todo");

        let key = TodoKey::new(todo_id, user_id);
        self.store.delete(&key).await
    }
}
