#![allow(dead_code)]
use reqwest::Url;

pub struct TestAppClient {
    url: Url,
    client: reqwest::Client,
}

impl TestAppClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn welcome(&self) -> reqwest::Response {
        self.client
            .get(self.url.clone())
            .send()
            .await
            .unwrap()
    }

    pub async fn get_all_todos(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("api/todo").unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo(&self, body: &str) -> reqwest::Response {
        self.client
            .post(self.url.join("api/todo").unwrap())
            .json(&serde_json::json!({
                "body": body,
            }))
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo_raw(&self, payload: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url.join("api/todo").unwrap())
            .json(payload)
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo_invalid_json(&self) -> reqwest::Response {
        self.client
            .post(self.url.join("api/todo").unwrap())
            .header("Content-Type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap()
    }

    pub async fn complete_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .patch(self.url.join("api/todo/").unwrap().join(todo_id).unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .delete(self.url.join("api/todo/").unwrap().join(todo_id).unwrap())
            .send()
            .await
            .unwrap()
    }
}
