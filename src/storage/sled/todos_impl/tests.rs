use super::*;

use crate::storage::sled::test_util::TestStorageBuilder;

#[tokio::test]
async fn test_insert_and_find_all() {
    let mut builder = TestStorageBuilder::new();
    let storage = builder.build_todo().await;

    let todos = storage.find_all().await.unwrap();
    assert!(todos.is_empty());

    let id = storage.insert_one(Todo::new("aaa")).await.unwrap();

    let todos = storage.find_all().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, Some(id));
    assert_eq!(todos[0].body, "aaa");
    assert!(!todos[0].completed);
}

#[tokio::test]
async fn test_insert_assigns_fresh_ids() {
    let mut builder = TestStorageBuilder::new();
    let storage = builder.build_todo().await;

    let id1 = storage.insert_one(Todo::new("aaa")).await.unwrap();
    let id2 = storage.insert_one(Todo::new("aaa")).await.unwrap();

    assert_ne!(id1, id2);
    assert_eq!(storage.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_one() {
    let mut builder = TestStorageBuilder::new().with_todos(3);
    let storage = builder.build_todo().await;
    let todos = builder.todos();

    let id = todos[1].id.unwrap();
    storage
        .update_one(ByIdFilter::new(id), SetCompletedUpdate::completed())
        .await
        .unwrap();

    let stored = storage.find_all().await.unwrap();
    for todo in &stored {
        if todo.id == Some(id) {
            assert!(todo.completed);
            assert_eq!(todo.body, todos[1].body);
        } else {
            assert!(!todo.completed);
        }
    }
}

#[tokio::test]
async fn test_update_one_is_idempotent() {
    let mut builder = TestStorageBuilder::new().with_todos(1);
    let storage = builder.build_todo().await;
    let id = builder.todos()[0].id.unwrap();

    for _ in 0..2 {
        storage
            .update_one(ByIdFilter::new(id), SetCompletedUpdate::completed())
            .await
            .unwrap();
    }

    let stored = storage.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].completed);
}

#[tokio::test]
async fn test_update_one_without_match_is_ok() {
    let mut builder = TestStorageBuilder::new().with_todos(2);
    let storage = builder.build_todo().await;

    storage
        .update_one(ByIdFilter::new(TodoId::new()), SetCompletedUpdate::completed())
        .await
        .unwrap();

    let stored = storage.find_all().await.unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|t| !t.completed));
}

#[tokio::test]
async fn test_delete_one() {
    let mut builder = TestStorageBuilder::new().with_todos(2);
    let storage = builder.build_todo().await;
    let todos = builder.todos();

    let id = todos[0].id.unwrap();
    storage.delete_one(ByIdFilter::new(id)).await.unwrap();

    let stored = storage.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0].id, Some(id));
}

#[tokio::test]
async fn test_delete_one_without_match_is_ok() {
    let mut builder = TestStorageBuilder::new().with_todos(1);
    let storage = builder.build_todo().await;

    storage
        .delete_one(ByIdFilter::new(TodoId::new()))
        .await
        .unwrap();

    assert_eq!(storage.find_all().await.unwrap().len(), 1);
}
