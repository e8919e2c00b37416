//! HTTP client for the admin API, the Rust counterpart of the generated
//! per-entity SDK: list, fetch by id, create, update.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path_segment: &str) -> String {
        format!("{}/api/{}", self.base_url.trim_end_matches('/'), path_segment)
    }

    /// GET /api/<segment>: all records.
    pub async fn list<T: DeserializeOwned>(&self, path_segment: &str) -> ClientResult<Vec<T>> {
        let response = self.client.get(self.url(path_segment)).send().await?;
        Self::handle_response(response).await
    }

    /// GET /api/<segment>/<id>: one record.
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        path_segment: &str,
        id: &str,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.url(path_segment), id);
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// POST /api/<segment>: create, echoes the stored record back.
    pub async fn create<T: DeserializeOwned, B: Serialize>(
        &self,
        path_segment: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path_segment))
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// PUT /api/<segment>/<id>: update, returns the stored record.
    pub async fn update_by_id<T: DeserializeOwned, B: Serialize>(
        &self,
        path_segment: &str,
        id: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.url(path_segment), id);
        let response = self.client.put(url).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ClientError::InvalidResponse(e.to_string()));
        }
        let message = match response.json::<Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("request failed")
                .to_string(),
            Err(_) => "request failed".to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
