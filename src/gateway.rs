//! HTTP gateway to the remote task store.
//!
//! Each operation issues exactly one request and resolves with one result
//! or one failure. There is no retry and no timeout beyond the transport
//! defaults.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::model::{NewTask, Task};

/// Errors produced by gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Connection or request failure before a status line was received.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the store.
    #[error("store returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body that does not match the wire contract.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Client-side interface to the remote task store.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetch every task, in store order.
    async fn list(&self) -> Result<Vec<Task>, GatewayError>;

    /// Create a task and return it with its server-assigned id.
    async fn create(&self, task: &NewTask) -> Result<Task, GatewayError>;

    /// Replace the task addressed by `id` and return the store's version.
    async fn update(&self, id: &str, task: &Task) -> Result<Task, GatewayError>;

    /// Delete the task addressed by `id`.
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}

/// Gateway backed by `reqwest` against a configured base URL.
pub struct HttpTaskGateway {
    client: Client,
    base_url: String,
}

impl HttpTaskGateway {
    /// Create a gateway for the store at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Check the status line and hand back the body of a success response.
    async fn read_success(response: reqwest::Response) -> Result<String, GatewayError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Status { status, body });
        }

        Ok(body)
    }
}

#[async_trait]
impl TaskGateway for HttpTaskGateway {
    async fn list(&self) -> Result<Vec<Task>, GatewayError> {
        tracing::debug!("Listing tasks from {}", self.base_url);

        let response = self.client.get(&self.base_url).send().await?;
        let body = Self::read_success(response).await?;

        let envelope: Envelope<Vec<Task>> = decode(&body)?;
        Ok(envelope.data)
    }

    async fn create(&self, task: &NewTask) -> Result<Task, GatewayError> {
        tracing::debug!("Creating task \"{}\"", task.title);

        let response = self
            .client
            .post(&self.base_url)
            .json(task)
            .send()
            .await?;
        let body = Self::read_success(response).await?;

        let envelope: Envelope<Task> = decode(&body)?;
        Ok(envelope.data)
    }

    async fn update(&self, id: &str, task: &Task) -> Result<Task, GatewayError> {
        tracing::debug!("Updating task {}", id);

        let response = self
            .client
            .put(self.task_url(id))
            .json(task)
            .send()
            .await?;
        let body = Self::read_success(response).await?;

        // The update endpoint returns the bare record, unlike list and
        // create which wrap theirs in a `data` envelope.
        decode(&body)
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        tracing::debug!("Deleting task {}", id);

        let response = self.client.delete(self.task_url(id)).send().await?;
        Self::read_success(response).await?;

        Ok(())
    }
}

/// The `{ data: ... }` wrapper used by the list and create endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(format!("{}, body: {}", e, body)))
}
