use crate::storage::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use strum_macros::AsRefStr;
use thiserror::Error;

#[derive(Debug, Error, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AppError {
    #[error("Body is required")]
    EmptyBody,

    #[error("Invalid todo id")]
    InvalidId,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal storage error")]
    InternalStorage(#[source] StorageError),
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        Self::InternalStorage(value)
    }
}

impl AppError {
    fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyBody | Self::InvalidId | Self::InvalidBody(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // validation faults are the client's problem, only storage faults are
        // logged as server errors
        if self.is_validation() {
            tracing::warn!(error = ?self, error_type = %self.as_ref(), "request rejected");

            let body = Json(json!({ "error": self.to_string() }));
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        tracing::error!(error = ?self, error_type = %self.as_ref(), "AppError");

        let body = Json(json!({ "error": "Internal Server Error" }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
