use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    handlers::error::AppError,
    storage::{ByIdFilter, SetCompletedUpdate, Todo, TodoId, TodoStorage},
};

pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    #[instrument(name = "Service::todo::list", skip_all)]
    pub(crate) async fn list(&self) -> Result<Vec<Todo>, AppError> {
        self.storage.find_all().await.map_err(Into::into)
    }

    /// Validates before storage is touched; the stored record always starts
    /// with `completed = false`, whatever the client sent.
    #[instrument(name = "Service::todo::create", skip_all)]
    pub(crate) async fn create(&self, body: &str) -> Result<Todo, AppError> {
        if body.is_empty() {
            return Err(AppError::EmptyBody);
        }

        let todo = Todo::new(body);
        let id = self.storage.insert_one(todo.clone()).await?;

        info!(todo_id = %id, "created todo");

        Ok(todo.with_id(id))
    }

    #[instrument(name = "Service::todo::complete", skip_all)]
    pub(crate) async fn complete(&self, id: TodoId) -> Result<(), AppError> {
        info!(todo_id = %id, "complete todo");

        self.storage
            .update_one(ByIdFilter::new(id), SetCompletedUpdate::completed())
            .await
            .map_err(Into::into)
    }

    #[instrument(name = "Service::todo::delete", skip_all)]
    pub(crate) async fn delete(&self, id: TodoId) -> Result<(), AppError> {
        info!(todo_id = %id, "delete todo");

        self.storage
            .delete_one(ByIdFilter::new(id))
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingStorage {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TodoStorage for RecordingStorage {
        async fn find_all(&self) -> Result<Vec<Todo>, StorageError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn insert_one(&self, _todo: Todo) -> Result<TodoId, StorageError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(TodoId::new())
        }

        async fn update_one(
            &self,
            _filter: ByIdFilter,
            _update: SetCompletedUpdate,
        ) -> Result<(), StorageError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn delete_one(&self, _filter: ByIdFilter) -> Result<(), StorageError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_with_empty_body_never_touches_storage() {
        let storage = Arc::new(RecordingStorage::default());
        let service = ServiceTodoRef::new(storage.clone());

        let result = service.create("").await;

        assert!(matches!(result, Err(AppError::EmptyBody)));
        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_forces_completed_false_and_attaches_id() {
        let storage = Arc::new(RecordingStorage::default());
        let service = ServiceTodoRef::new(storage.clone());

        let todo = service.create("buy milk").await.unwrap();

        assert!(todo.id.is_some());
        assert!(!todo.completed);
        assert_eq!(todo.body, "buy milk");
        assert_eq!(storage.calls.load(Ordering::SeqCst), 1);
    }
}
