pub(crate) mod error;
pub(crate) mod todo;
pub mod types;

pub(crate) use crate::service::Service;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
pub(crate) use types::*;

#[tracing::instrument(name = "health", skip_all)]
pub(crate) async fn health() -> impl IntoResponse {
    StatusCode::OK
}

#[tracing::instrument(name = "welcome", skip_all)]
pub(crate) async fn welcome() -> impl IntoResponse {
    Json(json!({
        "message1": "Welcome to ToDo List Project",
        "message2": "This is a sample response to test if the application is up",
    }))
}
