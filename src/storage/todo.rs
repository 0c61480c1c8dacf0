use super::TodoId;
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// The persisted task record. `id` stays `None` until the storage layer
/// assigns one at insert time; the wire format mirrors the `_id` convention
/// of the document store the service fronts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    pub completed: bool,
    pub body: String,
}

impl Todo {
    pub(crate) fn new(body: &str) -> Self {
        Self {
            id: None,
            completed: false,
            body: body.to_owned(),
        }
    }

    pub(crate) fn with_id(mut self, id: TodoId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Versioned on-disk shape. The stored record always carries its id, unlike
/// the wire-level `Todo` where it is optional.
#[derive(Encode, Decode, Serialize, Deserialize, Debug)]
#[serde(tag = "version", content = "data")]
pub(crate) enum TodoRecord {
    V1 {
        id: TodoId,
        completed: bool,
        body: String,
    },
}

impl From<TodoRecord> for Todo {
    fn from(value: TodoRecord) -> Self {
        match value {
            TodoRecord::V1 {
                id,
                completed,
                body,
            } => Self {
                id: Some(id),
                completed,
                body,
            },
        }
    }
}

impl TodoRecord {
    pub(crate) fn from_todo(todo: Todo, id: TodoId) -> Self {
        Self::V1 {
            id,
            completed: todo.completed,
            body: todo.body,
        }
    }

    pub(crate) fn apply(self, update: &super::SetCompletedUpdate) -> Self {
        match self {
            Self::V1 { id, body, .. } => Self::V1 {
                id,
                completed: update.completed,
                body,
            },
        }
    }
}
