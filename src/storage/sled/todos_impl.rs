use crate::storage::TodoId;
use crate::trace_err;

use super::error::SledStorageError;
use super::internal::{
    span_wrappers::{
        deserialize_in_span, deserialize_in_transaction_with_span,
        get_value_in_transaction_with_span, insert_value_in_transaction_with_span,
        insert_value_with_span, remove_value_with_span, serialize_in_span,
        serialize_in_transaction_with_span,
    },
    Key,
};
use super::todo_key;
use super::{BincodeConfig, SledStorage};
use super::{ByIdFilter, SetCompletedUpdate, StorageError, Todo, TodoRecord, TodoStorage};
use async_trait::async_trait;
use sled::Tree;
use tracing::{info, info_span, instrument, Span};

#[async_trait]
impl TodoStorage for SledStorage {
    #[instrument(name = "SledStorage::find_all", skip_all)]
    async fn find_all(&self) -> Result<Vec<Todo>, StorageError> {
        info!("find all todos");

        let todos = info_span!("sled::scan_todo_tree").in_scope(|| {
            let mut todos = Vec::new();
            for item in self.todo_tree.iter() {
                let (key_bytes, value_bytes) = trace_err!(
                    item.map_err(SledStorageError::Sled),
                    "failed to read next todo from storage"
                )?;

                // a key that does not parse means the tree is corrupt
                trace_err!(Key::from_bytes(&key_bytes), "invalid key in todo tree")?;

                let record = trace_err!(
                    deserialize_in_span::<TodoRecord>(&self.bincode_config, &value_bytes),
                    "failed to bin decode todo"
                )?;
                todos.push(Todo::from(record));
            }
            Ok::<_, SledStorageError>(todos)
        })?;

        info!(count = todos.len(), "found todos");

        Ok(todos)
    }

    #[instrument(name = "SledStorage::insert_one", skip_all)]
    async fn insert_one(&self, todo: Todo) -> Result<TodoId, StorageError> {
        let id = TodoId::new();

        info!(todo_id = %id, "insert todo");

        let key = todo_key(&id);
        let record = TodoRecord::from_todo(todo, id);

        let encoded: Vec<u8> = trace_err!(
            serialize_in_span(&self.bincode_config, &record),
            "failed to bin encode todo"
        )?;

        trace_err!(
            insert_value_with_span(&key, &encoded, &self.todo_tree),
            "failed to write todo into storage"
        )?;

        Ok(id)
    }

    #[instrument(name = "SledStorage::update_one", skip_all)]
    async fn update_one(
        &self,
        filter: ByIdFilter,
        update: SetCompletedUpdate,
    ) -> Result<(), StorageError> {
        // cloning tree should be cheap: struct Tree{inner: Arc<TreeInner>}
        let (todo_tree, bincode_config) = info_span!("Cloning tree and config")
            .in_scope(|| (self.todo_tree.clone(), self.bincode_config));

        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            span.in_scope(|| update_todo(filter, update, &todo_tree, &bincode_config))
        })
        .await?
    }

    #[instrument(name = "SledStorage::delete_one", skip_all)]
    async fn delete_one(&self, filter: ByIdFilter) -> Result<(), StorageError> {
        info!(todo_id = %filter.id, "delete todo");

        let key = todo_key(&filter.id);

        trace_err!(
            remove_value_with_span(&key, &self.todo_tree),
            "failed to remove todo from storage"
        )
        .map_err(Into::into)
    }
}

#[instrument(name = "update_todo", skip_all)]
fn update_todo(
    filter: ByIdFilter,
    update: SetCompletedUpdate,
    todo_tree: &Tree,
    bincode_config: &BincodeConfig,
) -> Result<(), StorageError> {
    info!(todo_id = %filter.id, completed = update.completed, "update todo");

    todo_tree
        .transaction(|tx| {
            let key = todo_key(&filter.id);
            let value = trace_err!(
                get_value_in_transaction_with_span(&key, tx),
                "failed to read todo from storage"
            )?;

            // updating a missing document counts as success, same as the
            // underlying store's no-match update
            let Some(value) = value else {
                info!(todo_id = %filter.id, "update matched nothing");
                return Ok(());
            };

            let record = trace_err!(
                deserialize_in_transaction_with_span::<TodoRecord>(bincode_config, &value),
                "failed to bin decode todo"
            )?
            .apply(&update);

            let encoded = trace_err!(
                serialize_in_transaction_with_span(bincode_config, &record),
                "failed to bin encode todo"
            )?;

            trace_err!(
                insert_value_in_transaction_with_span(&key, &encoded, tx),
                "failed to write todo into storage"
            )?;

            Ok(())
        })
        .map_err(SledStorageError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests;
