// MCP (Model Context Protocol) servers for rag-service
// Exposes rag-service domains as tools to agent clients over stdio

pub mod adapter;
pub mod cli;
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use adapter::Adapter;
pub use config::AdapterConfig;
pub use error::{ToolError, ToolResult};
pub use server::McpServer;
