// Process entry point shared by the adapter binaries

use crate::adapter::Adapter;
use crate::config::AdapterConfig;
use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use ragbridge_client::{StoreClient, StoreResult, DEFAULT_BASE_URL};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
pub struct Args {
    /// No-op for compatibility; exits without starting the server
    #[arg(long)]
    pub refresh_only: bool,

    /// Base URL of rag-service
    #[arg(long, env = "RAG_SERVICE_URL", default_value = DEFAULT_BASE_URL)]
    pub rag_service_url: String,

    /// Actor sent when a tool call does not name one
    #[arg(long, env = "RAG_DEFAULT_ACTOR")]
    pub default_actor: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "RAG_REQUEST_TIMEOUT", default_value_t = 15)]
    pub request_timeout: u64,
}

impl Args {
    /// Parse the process arguments under the adapter's own name.
    pub fn parse_for(adapter: Adapter) -> Self {
        let command = Self::command()
            .name(adapter.server_name())
            .about(format!("Run the {} MCP server.", adapter.server_name()));

        Self::from_arg_matches(&command.get_matches()).unwrap_or_else(|e| e.exit())
    }

    pub fn into_config(self, adapter: Adapter) -> StoreResult<AdapterConfig> {
        let default_actor = self
            .default_actor
            .map(|actor| actor.trim().to_string())
            .filter(|actor| !actor.is_empty())
            .unwrap_or_else(|| adapter.default_actor().to_string());

        AdapterConfig::new(
            &self.rag_service_url,
            Duration::from_secs(self.request_timeout),
            default_actor,
        )
    }
}

/// Logs go to stderr; stdout carries the protocol.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Full binary lifecycle: logging, arguments, serve, exit code.
pub async fn main(adapter: Adapter) -> ExitCode {
    init_tracing();
    let args = Args::parse_for(adapter);

    match run(adapter, args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal error in {} server: {:#}", adapter.server_name(), e);
            ExitCode::FAILURE
        }
    }
}

pub async fn run(adapter: Adapter, args: Args) -> Result<()> {
    let name = adapter.server_name();

    if args.refresh_only {
        tracing::info!("Nothing to refresh in {}; exiting.", name);
        return Ok(());
    }

    let config = args.into_config(adapter).context("Invalid configuration")?;

    tracing::info!(
        "Starting {} stdio server (RAG_SERVICE_URL={})",
        name,
        config.client.base_url
    );

    let client = Arc::new(
        StoreClient::from_config(config.client).context("Failed to create rag-service client")?,
    );
    let server = adapter.server(client.clone(), &config.default_actor);

    spawn_health_probe(client);

    server.run().await.context("MCP stdio transport failed")
}

/// Check rag-service once in the background; never blocks serving.
fn spawn_health_probe(client: Arc<StoreClient>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match client.health().await {
            Ok(_) => tracing::info!("rag-service is reachable"),
            Err(e) => tracing::warn!(
                error = %e,
                "rag-service health check failed; tool calls will fail until it is reachable"
            ),
        }
    })
}
