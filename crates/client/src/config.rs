//! Configuration types for the store client.

use crate::error::{StoreError, StoreResult};
use std::time::Duration;
use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8002";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the store client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of rag-service, without a trailing slash.
    pub base_url: String,
    /// Request timeout applied to every call.
    pub timeout: Duration,
    /// User-Agent header sent with every call.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a validated configuration for the given base URL.
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> StoreResult<Self> {
        let base_url = normalize_base_url(base_url.as_ref())?;

        if timeout.is_zero() {
            return Err(StoreError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            timeout,
            user_agent: default_user_agent(),
        })
    }

    /// Full URL for a store sub-path such as `/query`.
    ///
    /// Paths are appended rather than joined so that a base URL with a path
    /// prefix (`http://host/rag`) keeps that prefix.
    pub fn endpoint(&self, path: &str) -> StoreResult<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("ragbridge/{}", env!("CARGO_PKG_VERSION"))
}

fn normalize_base_url(raw: &str) -> StoreResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(StoreError::Config("base_url must not be empty".to_string()));
    }

    let parsed = Url::parse(trimmed)?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(StoreError::Config(format!(
                "base_url must use http or https, got: {}",
                other
            )))
        }
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(StoreError::Config(
            "base_url must not carry a query string or fragment".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}
