// Domain-scoped tools: CRUD and search pinned to a single rag-service domain

use crate::error::{ToolError, ToolResult};
use crate::tools::registry::{parse_arguments, Tool, ToolAccess, ToolRegistry};
use crate::tools::schema::{ParamKind, ParamSpec, ToolSpec};
use ragbridge_client::{Metadata, StoreClient, StoreResult, ROLES_DOMAIN};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Fixes the domain a tool set talks to and how its tools are named
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainScope {
    /// Domain sent on every request
    pub domain: &'static str,
    /// Tool names are `<prefix>_<operation>`
    pub prefix: &'static str,
    /// Name of the document id parameter
    pub id_param: &'static str,
    /// What one document is called in descriptions
    pub noun: &'static str,
}

impl DomainScope {
    pub const fn roles() -> Self {
        Self {
            domain: ROLES_DOMAIN,
            prefix: "roles",
            id_param: "role_id",
            noun: "role",
        }
    }

    fn tool_name(&self, operation: &str) -> String {
        format!("{}_{}", self.prefix, operation)
    }
}

/// Store client with the domain argument fixed
#[derive(Debug, Clone)]
pub struct ScopedStore {
    client: Arc<StoreClient>,
    scope: DomainScope,
}

impl ScopedStore {
    pub fn new(client: Arc<StoreClient>, scope: DomainScope) -> Self {
        Self { client, scope }
    }

    pub fn scope(&self) -> &DomainScope {
        &self.scope
    }

    pub async fn query(&self, query: &str, top_k: u32, actor: &str) -> StoreResult<Value> {
        self.client.query(self.scope.domain, query, top_k, actor).await
    }

    pub async fn list(&self, limit: u32, include_text: bool) -> StoreResult<Value> {
        self.client.list(self.scope.domain, limit, include_text).await
    }

    pub async fn get(&self, doc_id: &str) -> StoreResult<Value> {
        self.client.get(self.scope.domain, doc_id).await
    }

    pub async fn upsert(
        &self,
        doc_id: &str,
        text: &str,
        metadata: Option<Metadata>,
    ) -> StoreResult<Value> {
        self.client
            .upsert(self.scope.domain, doc_id, text, metadata)
            .await
    }

    pub async fn delete(&self, doc_id: &str) -> StoreResult<Value> {
        self.client.delete(self.scope.domain, doc_id).await
    }
}

/// Register search, list, get, upsert and delete for a scope.
pub fn register_scoped_tools(registry: &mut ToolRegistry, store: ScopedStore, default_actor: &str) {
    let store = Arc::new(store);
    registry.register(Arc::new(ScopedSearchTool::new(store.clone(), default_actor)));
    registry.register(Arc::new(ScopedListTool::new(store.clone())));
    registry.register(Arc::new(ScopedGetTool::new(store.clone())));
    registry.register(Arc::new(ScopedUpsertTool::new(store.clone())));
    registry.register(Arc::new(ScopedDeleteTool::new(store)));
}

fn id_param(scope: &DomainScope, purpose: &str) -> ParamSpec {
    ParamSpec::required(
        scope.id_param,
        ParamKind::String,
        format!("{} id (doc_id) to {}", capitalize(scope.noun), purpose),
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pull the document id out of validated arguments.
fn doc_id(spec: &ToolSpec, scope: &DomainScope, arguments: &Value) -> ToolResult<String> {
    arguments
        .get(scope.id_param)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ToolError::invalid_arguments(
                spec.name.clone(),
                format!("missing required argument '{}'", scope.id_param),
            )
        })
}

/// `<prefix>_search`
pub struct ScopedSearchTool {
    store: Arc<ScopedStore>,
    spec: ToolSpec,
}

impl ScopedSearchTool {
    pub fn new(store: Arc<ScopedStore>, default_actor: &str) -> Self {
        let scope = *store.scope();
        let spec = ToolSpec::new(
            scope.tool_name("search"),
            format!("Search the {} domain in rag-service.", scope.domain),
        )
        .param(ParamSpec::required(
            "query",
            ParamKind::String,
            format!("Full-text search query for the {} domain", scope.domain),
        ))
        .param(
            ParamSpec::optional(
                "top_k",
                ParamKind::Integer,
                "Number of matches to return",
                json!(5),
            )
            .with_minimum(1),
        )
        .param(ParamSpec::optional(
            "actor",
            ParamKind::String,
            "Actor/role for rate limiting and ACLs",
            json!(default_actor),
        ));

        Self { store, spec }
    }
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    top_k: u32,
    actor: String,
}

#[async_trait::async_trait]
impl Tool for ScopedSearchTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let args: SearchArgs = parse_arguments(&self.spec, arguments)?;
        Ok(self.store.query(&args.query, args.top_k, &args.actor).await?)
    }
}

/// `<prefix>_list`
pub struct ScopedListTool {
    store: Arc<ScopedStore>,
    spec: ToolSpec,
}

impl ScopedListTool {
    pub fn new(store: Arc<ScopedStore>) -> Self {
        let scope = *store.scope();
        let spec = ToolSpec::new(
            scope.tool_name("list"),
            format!("List {}s stored in rag-service.", scope.noun),
        )
        .param(
            ParamSpec::optional(
                "limit",
                ParamKind::Integer,
                format!("Maximum {}s to return", scope.noun),
                json!(100),
            )
            .with_minimum(1),
        )
        .param(ParamSpec::optional(
            "include_text",
            ParamKind::Boolean,
            format!("Include full {} text", scope.noun),
            json!(false),
        ));

        Self { store, spec }
    }
}

#[derive(Debug, Deserialize)]
struct ListArgs {
    limit: u32,
    include_text: bool,
}

#[async_trait::async_trait]
impl Tool for ScopedListTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let args: ListArgs = parse_arguments(&self.spec, arguments)?;
        Ok(self.store.list(args.limit, args.include_text).await?)
    }
}

/// `<prefix>_get`
pub struct ScopedGetTool {
    store: Arc<ScopedStore>,
    spec: ToolSpec,
}

impl ScopedGetTool {
    pub fn new(store: Arc<ScopedStore>) -> Self {
        let scope = *store.scope();
        let spec = ToolSpec::new(
            scope.tool_name("get"),
            format!("Fetch a single {} by id.", scope.noun),
        )
        .param(id_param(&scope, "retrieve"));

        Self { store, spec }
    }
}

#[async_trait::async_trait]
impl Tool for ScopedGetTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let id = doc_id(&self.spec, self.store.scope(), &arguments)?;
        Ok(self.store.get(&id).await?)
    }
}

/// `<prefix>_upsert`
pub struct ScopedUpsertTool {
    store: Arc<ScopedStore>,
    spec: ToolSpec,
}

impl ScopedUpsertTool {
    pub fn new(store: Arc<ScopedStore>) -> Self {
        let scope = *store.scope();
        let spec = ToolSpec::new(
            scope.tool_name("upsert"),
            format!(
                "Create or update a {} in the {} domain.",
                scope.noun, scope.domain
            ),
        )
        .param(id_param(&scope, "create or update"))
        .param(ParamSpec::required(
            "text",
            ParamKind::String,
            format!("{} text", capitalize(scope.noun)),
        ))
        .param(ParamSpec::optional(
            "metadata",
            ParamKind::Object,
            format!("Optional metadata to store with the {}", scope.noun),
            Value::Null,
        ));

        Self { store, spec }
    }
}

#[derive(Debug, Deserialize)]
struct UpsertArgs {
    text: String,
    metadata: Option<Metadata>,
}

#[async_trait::async_trait]
impl Tool for ScopedUpsertTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn access(&self) -> ToolAccess {
        ToolAccess::Write
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let id = doc_id(&self.spec, self.store.scope(), &arguments)?;
        let args: UpsertArgs = parse_arguments(&self.spec, arguments)?;
        Ok(self.store.upsert(&id, &args.text, args.metadata).await?)
    }
}

/// `<prefix>_delete`
pub struct ScopedDeleteTool {
    store: Arc<ScopedStore>,
    spec: ToolSpec,
}

impl ScopedDeleteTool {
    pub fn new(store: Arc<ScopedStore>) -> Self {
        let scope = *store.scope();
        let spec = ToolSpec::new(
            scope.tool_name("delete"),
            format!(
                "Delete a {} from the {} domain.",
                scope.noun, scope.domain
            ),
        )
        .param(id_param(&scope, "delete"));

        Self { store, spec }
    }
}

#[async_trait::async_trait]
impl Tool for ScopedDeleteTool {
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn access(&self) -> ToolAccess {
        ToolAccess::Destructive
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let id = doc_id(&self.spec, self.store.scope(), &arguments)?;
        Ok(self.store.delete(&id).await?)
    }
}
