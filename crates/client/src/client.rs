//! Main client for rag-service.

use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::StoreResult;
use crate::transport::HttpTransport;
use crate::types::{DocumentRef, IngestRequest, ListRequest, Metadata, QueryRequest};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Client for the rag-service HTTP API.
///
/// Each method performs exactly one request and hands back the decoded JSON
/// body unchanged. The client is cheap to clone and safe to share across
/// tasks.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: HttpTransport,
}

impl StoreClient {
    /// Create a new client builder.
    pub fn builder() -> StoreClientBuilder {
        StoreClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> StoreResult<Self> {
        let http = HttpTransport::new(Arc::new(config))?;
        Ok(Self { http })
    }

    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Relevance query against a domain.
    pub async fn query(
        &self,
        domain: &str,
        query: &str,
        top_k: u32,
        actor: &str,
    ) -> StoreResult<Value> {
        let body = QueryRequest {
            domain,
            query,
            actor,
            top_k,
        };
        self.http.post("/query", &body).await
    }

    /// List up to `limit` documents; bodies are only included when asked for.
    pub async fn list(&self, domain: &str, limit: u32, include_text: bool) -> StoreResult<Value> {
        let body = ListRequest {
            domain,
            limit,
            include_text,
        };
        self.http.post("/list", &body).await
    }

    /// Fetch one document. A missing document is reported in the store's own
    /// response body, not as an error.
    pub async fn get(&self, domain: &str, doc_id: &str) -> StoreResult<Value> {
        self.http.post("/get", &DocumentRef { domain, doc_id }).await
    }

    /// Create or replace a document.
    pub async fn upsert(
        &self,
        domain: &str,
        doc_id: &str,
        text: &str,
        metadata: Option<Metadata>,
    ) -> StoreResult<Value> {
        let body = IngestRequest {
            domain,
            doc_id,
            text,
            metadata: metadata.unwrap_or_default(),
        };
        self.http.post("/ingest", &body).await
    }

    /// Delete a document. Deleting an unknown id is not an error here.
    pub async fn delete(&self, domain: &str, doc_id: &str) -> StoreResult<Value> {
        self.http.post("/delete", &DocumentRef { domain, doc_id }).await
    }

    /// Liveness probe.
    pub async fn health(&self) -> StoreResult<Value> {
        self.http.get("/health").await
    }
}

/// Builder for creating a StoreClient.
pub struct StoreClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl StoreClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL of rag-service.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> StoreResult<StoreClient> {
        let mut config = ClientConfig::new(&self.base_url, self.timeout)?;
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        StoreClient::from_config(config)
    }
}

impl Default for StoreClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
