use super::TodoId;

/// Typed stand-in for a `{"_id": <id>}` document filter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ByIdFilter {
    pub id: TodoId,
}

impl ByIdFilter {
    pub fn new(id: TodoId) -> Self {
        Self { id }
    }
}

/// Typed stand-in for a `{"$set": {"completed": <flag>}}` update document.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SetCompletedUpdate {
    pub completed: bool,
}

impl SetCompletedUpdate {
    pub fn completed() -> Self {
        Self { completed: true }
    }
}
