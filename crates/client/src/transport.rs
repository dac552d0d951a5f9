//! HTTP transport layer for the store client.

use crate::config::ClientConfig;
use crate::error::{StoreError, StoreResult};
use reqwest::{header, Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP transport for rag-service calls.
///
/// One call, one request: there is no retry loop and no cache.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> StoreResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(StoreError::Build)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a POST request with a JSON body and decode the JSON reply.
    pub async fn post<B: Serialize>(&self, path: &'static str, body: &B) -> StoreResult<Value> {
        let url = self.config.endpoint(path)?;
        debug!(url = %url, "POST request");

        self.execute(path, self.client.post(url).json(body)).await
    }

    /// Execute a GET request and decode the JSON reply.
    pub async fn get(&self, path: &'static str) -> StoreResult<Value> {
        let url = self.config.endpoint(path)?;
        debug!(url = %url, "GET request");

        self.execute(path, self.client.get(url)).await
    }

    async fn execute(&self, path: &'static str, request: RequestBuilder) -> StoreResult<Value> {
        let response = request.send().await.map_err(|source| {
            warn!(path, timeout = source.is_timeout(), error = %source, "rag-service unreachable");
            StoreError::Transport { path, source }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(path, status = status.as_u16(), "rag-service returned an error status");
            return Err(StoreError::from_status(path, status.as_u16(), &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| StoreError::Transport { path, source })?;

        serde_json::from_slice(&bytes).map_err(|source| {
            warn!(path, error = %source, "rag-service returned invalid JSON");
            StoreError::Decode { path, source }
        })
    }
}
