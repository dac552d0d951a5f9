// Bridge tools: free-form domain queries plus a roles shortcut

use crate::error::ToolResult;
use crate::tools::registry::{parse_arguments, Tool};
use crate::tools::schema::{ParamKind, ParamSpec, ToolSpec};
use ragbridge_client::{StoreClient, ROLES_DOMAIN};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const ACTOR_DESCRIPTION: &str = "Actor/role for rate limiting and ACLs";

/// Tool to query any rag-service domain
pub struct RagQueryTool {
    client: Arc<StoreClient>,
    spec: ToolSpec,
}

impl RagQueryTool {
    pub fn new(client: Arc<StoreClient>, default_actor: &str) -> Self {
        let spec = ToolSpec::new("rag_query", "Query rag-service /query for a domain.")
            .param(ParamSpec::required("domain", ParamKind::String, "Domain to query"))
            .param(ParamSpec::required("query", ParamKind::String, "Search query"))
            .param(
                ParamSpec::optional("top_k", ParamKind::Integer, "Number of results", json!(5))
                    .with_minimum(1),
            )
            .param(ParamSpec::optional(
                "actor",
                ParamKind::String,
                ACTOR_DESCRIPTION,
                json!(default_actor),
            ));

        Self { client, spec }
    }
}

#[derive(Debug, Deserialize)]
struct RagQueryArgs {
    domain: String,
    query: String,
    top_k: u32,
    actor: String,
}

#[async_trait::async_trait]
impl Tool for RagQueryTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let args: RagQueryArgs = parse_arguments(&self.spec, arguments)?;

        tracing::debug!(domain = %args.domain, top_k = args.top_k, actor = %args.actor, "rag_query");
        Ok(self
            .client
            .query(&args.domain, &args.query, args.top_k, &args.actor)
            .await?)
    }
}

/// Tool to look up a role prompt by name
///
/// Same request as `rag_query` with the domain fixed to `roles`.
pub struct RagGetRoleTool {
    client: Arc<StoreClient>,
    spec: ToolSpec,
}

impl RagGetRoleTool {
    pub fn new(client: Arc<StoreClient>, default_actor: &str) -> Self {
        let spec = ToolSpec::new("rag_get_role", "Query the 'roles' domain for a role prompt.")
            .param(ParamSpec::required(
                "name",
                ParamKind::String,
                "Role name to retrieve from rag-service roles domain",
            ))
            .param(
                ParamSpec::optional(
                    "top_k",
                    ParamKind::Integer,
                    "Number of matches to return",
                    json!(3),
                )
                .with_minimum(1),
            )
            .param(ParamSpec::optional(
                "actor",
                ParamKind::String,
                ACTOR_DESCRIPTION,
                json!(default_actor),
            ));

        Self { client, spec }
    }
}

#[derive(Debug, Deserialize)]
struct RagGetRoleArgs {
    name: String,
    top_k: u32,
    actor: String,
}

#[async_trait::async_trait]
impl Tool for RagGetRoleTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let args: RagGetRoleArgs = parse_arguments(&self.spec, arguments)?;

        tracing::debug!(name = %args.name, top_k = args.top_k, "rag_get_role");
        Ok(self
            .client
            .query(ROLES_DOMAIN, &args.name, args.top_k, &args.actor)
            .await?)
    }
}
