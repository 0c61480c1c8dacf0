use super::error::AppError;
use super::types::*;
use crate::{handlers::Service, storage::TodoId};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

#[tracing::instrument(name = "handlers::todo::get_all", skip_all)]
pub(crate) async fn get_all(State(service): State<Service>) -> Result<impl IntoResponse, AppError> {
    let todos = service.todo().list().await?;

    info!("Get {} ToDos", todos.len());

    Ok(Json(todos))
}

#[tracing::instrument(name = "handlers::todo::add", skip_all)]
pub(crate) async fn add(
    State(service): State<Service>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    let todo = service.todo().create(&input.body).await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

#[tracing::instrument(name = "handlers::todo::complete", skip_all)]
pub(crate) async fn complete(
    State(service): State<Service>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id: TodoId = id.parse().map_err(|_| AppError::InvalidId)?;

    service.todo().complete(id).await?;

    Ok(Json(MessageResponse::new("Todo was completed")))
}

#[tracing::instrument(name = "handlers::todo::delete", skip_all)]
pub(crate) async fn delete(
    State(service): State<Service>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id: TodoId = id.parse().map_err(|_| AppError::InvalidId)?;

    service.todo().delete(id).await?;

    Ok(Json(MessageResponse::new("Todo was deleted")))
}
