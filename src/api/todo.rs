//! Todo Endpoints

use crate::error::ApiError;
use crate::models::{Todo, TodoDraft};

use super::{read_json, send, Method, TodoClient};

impl TodoClient {
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = send(Method::Get, &self.config.todos_url(), None).await?;
        read_json(response).await
    }

    /// Backend answers 204; the body is ignored
    pub async fn delete_todo(&self, id: u64) -> Result<(), ApiError> {
        send(Method::Delete, &self.config.todo_url(id), None).await?;
        Ok(())
    }

    /// Create (POST) or update (PUT), depending on whether the draft has an id
    pub async fn save_todo(&self, draft: &TodoDraft) -> Result<Todo, ApiError> {
        let (method, url) = self.save_request(draft);
        let body = serde_json::to_string(draft)?;
        let response = send(method, &url, Some(body)).await?;
        read_json(response).await
    }

    pub(super) fn save_request(&self, draft: &TodoDraft) -> (Method, String) {
        match draft.id {
            Some(id) => (Method::Put, self.config.todo_url(id)),
            None => (Method::Post, self.config.todos_url()),
        }
    }
}
