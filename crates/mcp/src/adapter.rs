// The two adapter flavours and the tool sets they publish

use crate::config::AdapterConfig;
use crate::server::McpServer;
use crate::tools::{
    register_scoped_tools, DomainScope, RagGetRoleTool, RagQueryTool, ScopedStore, ToolRegistry,
};
use ragbridge_client::{StoreClient, StoreResult};
use std::sync::Arc;

/// Which server a binary runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    /// `rag_query` over any domain plus `rag_get_role`
    Bridge,
    /// CRUD and search tools pinned to the roles domain
    Roles,
}

impl Adapter {
    /// Name reported as `serverInfo.name`
    pub fn server_name(self) -> &'static str {
        match self {
            Self::Bridge => "mcp-rag-bridge",
            Self::Roles => "rossicorp-roles",
        }
    }

    /// Actor sent when the caller does not name one
    pub fn default_actor(self) -> &'static str {
        match self {
            Self::Bridge => "mcp-bridge",
            Self::Roles => "rossicorp-roles",
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            Self::Bridge => {
                "Bridge to rag-service. Use rag_query to search any domain and \
                 rag_get_role to look up a role prompt by name."
            }
            Self::Roles => {
                "Role prompts stored in the rag-service roles domain. Use roles_search \
                 or roles_list to find roles, roles_get to read one, roles_upsert to \
                 create or update and roles_delete to remove."
            }
        }
    }

    /// Tool registry for this adapter, sharing one client.
    pub fn registry(self, client: Arc<StoreClient>, default_actor: &str) -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        match self {
            Self::Bridge => {
                registry.register(Arc::new(RagQueryTool::new(client.clone(), default_actor)));
                registry.register(Arc::new(RagGetRoleTool::new(client, default_actor)));
            }
            Self::Roles => {
                let store = ScopedStore::new(client, DomainScope::roles());
                register_scoped_tools(&mut registry, store, default_actor);
            }
        }
        registry
    }

    /// Server whose tools all go through `client`.
    pub fn server(self, client: Arc<StoreClient>, default_actor: &str) -> McpServer {
        let registry = self.registry(client, default_actor);
        McpServer::new(self.server_name(), registry).with_instructions(self.instructions())
    }

    /// Build a ready-to-run server from validated configuration.
    pub fn build_server(self, config: &AdapterConfig) -> StoreResult<McpServer> {
        let client = Arc::new(StoreClient::from_config(config.client.clone())?);
        Ok(self.server(client, &config.default_actor))
    }
}
