//! Request bodies sent to rag-service.

use serde::Serialize;

/// Domain holding role-prompt documents.
pub const ROLES_DOMAIN: &str = "roles";

/// Free-form document metadata.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Body of `POST /query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest<'a> {
    pub domain: &'a str,
    pub query: &'a str,
    pub actor: &'a str,
    pub top_k: u32,
}

/// Body of `POST /list`.
#[derive(Debug, Clone, Serialize)]
pub struct ListRequest<'a> {
    pub domain: &'a str,
    pub limit: u32,
    pub include_text: bool,
}

/// Body of `POST /get` and `POST /delete`.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRef<'a> {
    pub domain: &'a str,
    pub doc_id: &'a str,
}

/// Body of `POST /ingest`.
///
/// `metadata` is always serialized as an object, never `null`.
#[derive(Debug, Clone, Serialize)]
pub struct IngestRequest<'a> {
    pub domain: &'a str,
    pub doc_id: &'a str,
    pub text: &'a str,
    pub metadata: Metadata,
}
