//! Error types for the store client.

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Longest response body excerpt kept on a status error.
const BODY_EXCERPT_LIMIT: usize = 512;

/// Errors that can occur when talking to rag-service.
///
/// `Transport`, `Status` and `Decode` all mean the store could not serve the
/// request; [`StoreError::is_unavailable`] folds them together for callers
/// that do not care which one happened.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connection, DNS or timeout failure before a response arrived.
    #[error("rag-service request failed for {path}: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-success status.
    #[error("rag-service request failed for {path}: HTTP {status}: {body}")]
    Status {
        path: &'static str,
        status: u16,
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("rag-service request failed for {path}: invalid JSON response: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl StoreError {
    /// True for every failure that means "the store did not serve this call".
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }

    /// True when the request hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// Store sub-path of the failed request, if the error came from one.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Transport { path, .. } | Self::Status { path, .. } | Self::Decode { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }

    /// HTTP status returned by the store, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_status(path: &'static str, status: u16, body: &str) -> Self {
        Self::Status {
            path,
            status,
            body: excerpt(body),
        }
    }
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    if body.len() <= BODY_EXCERPT_LIMIT {
        return body.to_string();
    }

    let mut end = BODY_EXCERPT_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_names_path() {
        let err = StoreError::from_status("/ingest", 503, "service warming up");

        assert_eq!(
            err.to_string(),
            "rag-service request failed for /ingest: HTTP 503: service warming up"
        );
        assert_eq!(err.path(), Some("/ingest"));
        assert_eq!(err.status(), Some(503));
        assert!(err.is_unavailable());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "é".repeat(600);
        let err = StoreError::from_status("/query", 500, &body);

        match err {
            StoreError::Status { body, .. } => {
                assert!(body.ends_with("..."));
                assert!(body.len() <= BODY_EXCERPT_LIMIT + 3);
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_errors_are_not_unavailable() {
        let err = StoreError::Config("bad".to_string());

        assert!(!err.is_unavailable());
        assert_eq!(err.path(), None);
        assert_eq!(err.status(), None);
    }
}
