pub mod bridge;
pub mod registry;
pub mod schema;
pub mod scoped;

pub use bridge::{RagGetRoleTool, RagQueryTool};
pub use registry::{parse_arguments, Tool, ToolAccess, ToolRegistry};
pub use schema::{ParamKind, ParamSpec, ToolSpec};
pub use scoped::{
    register_scoped_tools, DomainScope, ScopedDeleteTool, ScopedGetTool, ScopedListTool,
    ScopedSearchTool, ScopedStore, ScopedUpsertTool,
};
