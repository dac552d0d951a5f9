// Error types for tool dispatch

use ragbridge_client::StoreError;
use thiserror::Error;

/// Result type alias for tool calls
pub type ToolResult<T> = std::result::Result<T, ToolError>;

/// Errors a tool call can end in
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool registered under this name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments failed schema validation; the store was never contacted
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    /// The store could not serve the request
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ToolError {
    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Rejected before the tool ran: reported as a protocol error, not tool output.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::UnknownTool(_) | Self::InvalidArguments { .. })
    }
}
