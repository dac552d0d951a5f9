// Roles MCP server: search, list, get, upsert and delete in the roles domain

use ragbridge_mcp::Adapter;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    ragbridge_mcp::cli::main(Adapter::Roles).await
}
