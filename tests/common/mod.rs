#![allow(dead_code, unused_imports)]

mod client;
mod server;

use axum::Router;
pub use client::TestAppClient;
use todo_service::Service;
use todo_service::TestStorageBuilder;
use todo_service::{build_app, Settings};

pub use server::{spawn_test_app, TestAppHandle};

#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct MessageBody {
    pub message: String,
}

pub async fn create_test_app(settings_file: Option<&str>) -> Router {
    let mut builder = TestStorageBuilder::new();
    let todo_storage = builder.build_todo().await;
    let flush_storage = builder.build_flush().await;

    let settings = match settings_file {
        Some(file_name) => Settings::from_file(file_name).unwrap(),
        None => Settings::new().unwrap(),
    };

    let service = Service::new(todo_storage, flush_storage);

    build_app(service, settings)
}
