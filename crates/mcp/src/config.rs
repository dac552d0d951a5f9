// Process-wide adapter configuration, built once at startup

use crate::adapter::Adapter;
use ragbridge_client::{ClientConfig, StoreResult};
use std::time::Duration;

/// Everything an adapter process needs, passed down from `main`
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Connection settings for rag-service
    pub client: ClientConfig,
    /// Actor used when a tool call does not name one
    pub default_actor: String,
}

impl AdapterConfig {
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        default_actor: impl Into<String>,
    ) -> StoreResult<Self> {
        Ok(Self {
            client: ClientConfig::new(base_url, request_timeout)?,
            default_actor: default_actor.into(),
        })
    }

    /// Default settings for an adapter.
    pub fn for_adapter(adapter: Adapter) -> Self {
        Self {
            client: ClientConfig::default(),
            default_actor: adapter.default_actor().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragbridge_client::StoreError;

    #[test]
    fn test_for_adapter_defaults() {
        let config = AdapterConfig::for_adapter(Adapter::Bridge);

        assert_eq!(config.client.base_url, "http://localhost:8002");
        assert_eq!(config.client.timeout, Duration::from_secs(15));
        assert_eq!(config.default_actor, "mcp-bridge");
    }

    #[test]
    fn test_new_validates_url() {
        let result = AdapterConfig::new("mailto:ops@example.com", Duration::from_secs(5), "x");
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[test]
    fn test_new_normalizes_url() {
        let config =
            AdapterConfig::new("http://127.0.0.1:9000/", Duration::from_secs(5), "ops").unwrap();

        assert_eq!(config.client.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.default_actor, "ops");
    }
}
