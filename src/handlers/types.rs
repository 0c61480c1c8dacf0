use serde::{Deserialize, Serialize};

/// Create request payload. A client-sent `completed` or `_id` is ignored,
/// serde drops unknown fields and the service assigns both.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateTodo {
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
