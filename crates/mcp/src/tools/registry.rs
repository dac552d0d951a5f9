// Tool trait and registry

use crate::error::{ToolError, ToolResult};
use crate::protocol::{ToolAnnotations, ToolSchema};
use crate::tools::schema::ToolSpec;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Declared name, description and parameters
    fn spec(&self) -> &ToolSpec;

    /// Run the tool on arguments already validated against [`Tool::spec`]
    async fn execute(&self, arguments: Value) -> ToolResult<Value>;

    /// What the tool does to the store
    fn access(&self) -> ToolAccess {
        ToolAccess::ReadOnly
    }

    /// Schema as published in `tools/list`
    fn schema(&self) -> ToolSchema {
        let spec = self.spec();
        ToolSchema {
            name: spec.name.clone(),
            description: spec.description.clone(),
            input_schema: spec.input_schema(),
            annotations: Some(self.access().annotations()),
        }
    }
}

/// Effect a tool has on stored documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolAccess {
    /// Queries and reads
    ReadOnly,
    /// Creates or replaces documents; repeating the call is harmless
    Write,
    /// Removes documents
    Destructive,
}

impl ToolAccess {
    pub fn annotations(self) -> ToolAnnotations {
        ToolAnnotations {
            read_only_hint: self == Self::ReadOnly,
            destructive_hint: self == Self::Destructive,
            idempotent_hint: true,
            open_world_hint: false,
        }
    }
}

/// Deserialize validated arguments into a tool's typed argument struct.
pub fn parse_arguments<T: DeserializeOwned>(spec: &ToolSpec, arguments: Value) -> ToolResult<T> {
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(spec.name.clone(), e.to_string()))
}

/// Tool registry for managing available tools
///
/// Tools are listed in registration order.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.spec().name.clone();
        match self.tools.iter().position(|t| t.spec().name == name) {
            Some(index) => self.tools[index] = tool,
            None => self.tools.push(tool),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.spec().name == name).cloned()
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|t| t.schema()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Validate arguments against the tool's declared schema, then run it.
    pub async fn call(&self, name: &str, arguments: &Value) -> ToolResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let validated = tool
            .spec()
            .validate(arguments)
            .map_err(|message| ToolError::invalid_arguments(name, message))?;

        tool.execute(validated).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
