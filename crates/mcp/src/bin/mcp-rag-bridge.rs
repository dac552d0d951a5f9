// Bridge MCP server: rag_query and rag_get_role

use ragbridge_mcp::Adapter;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    ragbridge_mcp::cli::main(Adapter::Bridge).await
}
