mod error;
mod ids;
mod query;
mod sled;
mod todo;

#[cfg(feature = "integration_tests")]
pub use sled::test_util;
pub(crate) use sled::{error::SledStartupError, SledStorage};

use async_trait::async_trait;
pub(crate) use error::StorageError;
pub use ids::TodoId;
pub use query::{ByIdFilter, SetCompletedUpdate};
pub use todo::Todo;
pub(crate) use todo::TodoRecord;

/// The capability surface the resource service needs from a document store:
/// one collection of todos, four operations, no more.
#[async_trait]
pub trait TodoStorage: Send + Sync {
    /// Every stored todo, in the backend's default iteration order.
    async fn find_all(&self) -> Result<Vec<Todo>, StorageError>;

    /// Inserts the record and returns the storage-assigned identifier.
    async fn insert_one(&self, todo: Todo) -> Result<TodoId, StorageError>;

    /// Applies the update to the matching document. Matching nothing is not
    /// an error.
    async fn update_one(
        &self,
        filter: ByIdFilter,
        update: SetCompletedUpdate,
    ) -> Result<(), StorageError>;

    /// Removes the matching document. Matching nothing is not an error.
    async fn delete_one(&self, filter: ByIdFilter) -> Result<(), StorageError>;
}

#[async_trait]
pub trait FlushStorage: Send + Sync {
    async fn flush(&self) -> Result<(), StorageError>;
}
