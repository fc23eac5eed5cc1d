//! Gateway speaking to the task API over HTTP.

use super::{GatewayError, GatewayResult, TaskGateway};
use crate::api::{
    ApiError,
    dto::{StatusRequest, TaskRequest},
};
use crate::task::domain::{Task, TaskDraft, TaskId, TaskStatus};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP gateway for a server exposing `/api/tasks`.
#[derive(Debug, Clone)]
pub struct RestTaskGateway {
    http: reqwest::Client,
    base_url: String,
}

impl RestTaskGateway {
    /// Creates a gateway for the server at `base_url`, e.g.
    /// `http://localhost:5000`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a gateway reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        let kept = base.trim_end_matches('/').len();
        base.truncate(kept);
        Self {
            http,
            base_url: base,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/api/tasks/{id}", self.base_url)
    }
}

#[async_trait]
impl TaskGateway for RestTaskGateway {
    async fn fetch_all(&self) -> GatewayResult<Vec<Task>> {
        let response = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(GatewayError::unavailable)?;
        decode(response, None).await
    }

    async fn create(&self, draft: &TaskDraft) -> GatewayResult<Task> {
        let response = self
            .http
            .post(self.collection_url())
            .json(&TaskRequest::from(draft))
            .send()
            .await
            .map_err(GatewayError::unavailable)?;
        decode(response, None).await
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> GatewayResult<Task> {
        let response = self
            .http
            .put(self.task_url(id))
            .json(&TaskRequest::from(draft))
            .send()
            .await
            .map_err(GatewayError::unavailable)?;
        decode(response, Some(id)).await
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> GatewayResult<Task> {
        let body = StatusRequest {
            status: Some(status.as_str().to_owned()),
        };
        let response = self
            .http
            .patch(format!("{}/status", self.task_url(id)))
            .json(&body)
            .send()
            .await
            .map_err(GatewayError::unavailable)?;
        decode(response, Some(id)).await
    }

    async fn delete(&self, id: TaskId) -> GatewayResult<()> {
        let response = self
            .http
            .delete(self.task_url(id))
            .send()
            .await
            .map_err(GatewayError::unavailable)?;
        decode::<serde_json::Value>(response, Some(id))
            .await
            .map(drop)
    }
}

/// Turns a response into its JSON body or the matching gateway error.
async fn decode<T: DeserializeOwned>(response: Response, id: Option<TaskId>) -> GatewayResult<T> {
    let status = response.status();
    if status.is_success() {
        return response.json().await.map_err(GatewayError::unavailable);
    }
    if let (StatusCode::NOT_FOUND, Some(task)) = (status, id) {
        return Err(GatewayError::NotFound(task));
    }
    if status.is_client_error() {
        let body: ApiError = response.json().await.map_err(GatewayError::unavailable)?;
        return Err(GatewayError::Rejected(describe(&body)));
    }
    Err(GatewayError::UnexpectedStatus(status.as_u16()))
}

fn describe(error: &ApiError) -> String {
    let fields: Vec<String> = error
        .details
        .iter()
        .flatten()
        .map(|detail| format!("{}: {}", detail.field, detail.message))
        .collect();
    if fields.is_empty() {
        error.message.clone()
    } else {
        format!("{} ({})", error.message, fields.join("; "))
    }
}
