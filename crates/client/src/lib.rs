//! # ragbridge client
//!
//! Async client for rag-service, the document-retrieval backend that stores
//! text documents in named domains.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ragbridge_client::{StoreClient, StoreResult};
//!
//! #[tokio::main]
//! async fn main() -> StoreResult<()> {
//!     let client = StoreClient::builder()
//!         .base_url("http://localhost:8002")
//!         .build()?;
//!
//!     let hits = client.query("roles", "toolsmith", 3, "docs-example").await?;
//!     println!("{}", hits);
//!
//!     Ok(())
//! }
//! ```
//!
//! Responses are returned as raw [`serde_json::Value`]s. The client never
//! reshapes what the store sends back.

pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{StoreClient, StoreClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{StoreError, StoreResult};
pub use types::{Metadata, ROLES_DOMAIN};
