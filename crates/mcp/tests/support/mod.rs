//! Shared helpers for the MCP integration tests.
//!
//! `FakeRagService` is a small in-memory stand-in for rag-service that speaks
//! the same HTTP surface (`/health`, `/query`, `/list`, `/get`, `/ingest`,
//! `/delete`). Relevance is a naive term count, enough to make ranking
//! assertions deterministic.

#![allow(dead_code)]

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use ragbridge_mcp::{Adapter, AdapterConfig, McpServer};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const ROLE_TEXT: &str = "# MCP Toolsmith Role\n\
You are an MCP toolsmith. Design, implement, test, and wire MCP servers/clients using the \
official spec and client configs. Use Inspector to validate initialize/tools/list/tools/call.";

#[derive(Debug, Clone)]
struct StoredDoc {
    text: String,
    metadata: Map<String, Value>,
}

#[derive(Default)]
struct Inner {
    // (domain, doc_id) -> document
    docs: Mutex<BTreeMap<(String, String), StoredDoc>>,
    // (path, body) of every POST received
    requests: Mutex<Vec<(String, Value)>>,
}

impl Inner {
    fn record(&self, path: &str, body: Value) {
        self.requests.lock().unwrap().push((path.to_string(), body));
    }
}

/// In-process rag-service listening on a random local port.
pub struct FakeRagService {
    pub url: String,
    inner: Arc<Inner>,
}

impl FakeRagService {
    pub async fn start() -> Self {
        let inner = Arc::new(Inner::default());

        let app = Router::new()
            .route("/health", get(health))
            .route("/query", post(query))
            .route("/list", post(list))
            .route("/get", post(get_doc))
            .route("/ingest", post(ingest))
            .route("/delete", post(delete))
            .with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            inner,
        }
    }

    /// Seed a document directly, bypassing the adapter.
    pub fn insert(&self, domain: &str, doc_id: &str, text: &str, metadata: Value) {
        let metadata = metadata.as_object().cloned().unwrap_or_default();
        self.inner.docs.lock().unwrap().insert(
            (domain.to_string(), doc_id.to_string()),
            StoredDoc {
                text: text.to_string(),
                metadata,
            },
        );
    }

    /// Bodies received on a path, oldest first.
    pub fn bodies(&self, path: &str) -> Vec<Value> {
        self.inner
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.inner.requests.lock().unwrap().len()
    }
}

#[derive(Deserialize)]
struct QueryBody {
    domain: String,
    query: String,
    actor: String,
    top_k: usize,
}

#[derive(Deserialize)]
struct ListBody {
    domain: String,
    limit: usize,
    include_text: bool,
}

#[derive(Deserialize)]
struct DocBody {
    domain: String,
    doc_id: String,
}

#[derive(Deserialize)]
struct IngestBody {
    domain: String,
    doc_id: String,
    text: String,
    metadata: Map<String, Value>,
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn query(State(inner): State<Arc<Inner>>, Json(raw): Json<Value>) -> Json<Value> {
    inner.record("/query", raw.clone());
    let body: QueryBody = serde_json::from_value(raw).unwrap();

    let terms: Vec<String> = body
        .query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let docs = inner.docs.lock().unwrap();
    let mut scored: Vec<(usize, &String, &StoredDoc)> = docs
        .iter()
        .filter(|((domain, _), _)| *domain == body.domain)
        .map(|((_, id), doc)| {
            let haystack = format!("{} {}", id, doc.text).to_lowercase();
            let score = terms.iter().map(|t| haystack.matches(t.as_str()).count()).sum();
            (score, id, doc)
        })
        .filter(|(score, _, _)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    let results: Vec<Value> = scored
        .into_iter()
        .take(body.top_k)
        .map(|(score, id, doc)| {
            json!({"id": id, "text": doc.text, "metadata": doc.metadata, "score": score})
        })
        .collect();

    Json(json!({"domain": body.domain, "results": results}))
}

async fn list(State(inner): State<Arc<Inner>>, Json(raw): Json<Value>) -> Json<Value> {
    inner.record("/list", raw.clone());
    let body: ListBody = serde_json::from_value(raw).unwrap();

    let docs = inner.docs.lock().unwrap();
    let results: Vec<Value> = docs
        .iter()
        .filter(|((domain, _), _)| *domain == body.domain)
        .take(body.limit)
        .map(|((_, id), doc)| {
            let mut entry = json!({"id": id, "metadata": doc.metadata});
            if body.include_text {
                entry["text"] = json!(doc.text);
            }
            entry
        })
        .collect();

    Json(json!({"domain": body.domain, "results": results}))
}

async fn get_doc(State(inner): State<Arc<Inner>>, Json(raw): Json<Value>) -> Json<Value> {
    inner.record("/get", raw.clone());
    let body: DocBody = serde_json::from_value(raw).unwrap();

    let docs = inner.docs.lock().unwrap();
    match docs.get(&(body.domain, body.doc_id.clone())) {
        Some(doc) => Json(json!({
            "success": true,
            "result": {"id": body.doc_id, "text": doc.text, "metadata": doc.metadata}
        })),
        None => Json(json!({"success": false, "result": null})),
    }
}

async fn ingest(State(inner): State<Arc<Inner>>, Json(raw): Json<Value>) -> Json<Value> {
    inner.record("/ingest", raw.clone());
    let body: IngestBody = serde_json::from_value(raw).unwrap();

    inner.docs.lock().unwrap().insert(
        (body.domain.clone(), body.doc_id.clone()),
        StoredDoc {
            text: body.text,
            metadata: body.metadata,
        },
    );

    Json(json!({"success": true, "domain": body.domain, "doc_id": body.doc_id}))
}

async fn delete(State(inner): State<Arc<Inner>>, Json(raw): Json<Value>) -> Json<Value> {
    inner.record("/delete", raw.clone());
    let body: DocBody = serde_json::from_value(raw).unwrap();

    let removed = inner
        .docs
        .lock()
        .unwrap()
        .remove(&(body.domain, body.doc_id))
        .is_some();

    Json(json!({"deleted": removed}))
}

/// Server for `adapter` pointed at `base_url`, with actor "tester".
pub fn server_for(adapter: Adapter, base_url: &str) -> McpServer {
    let config = AdapterConfig::new(base_url, Duration::from_secs(5), "tester").unwrap();
    adapter.build_server(&config).unwrap()
}

/// A base URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Send one JSON-RPC request and return the response as JSON.
pub async fn rpc(server: &McpServer, id: i64, method: &str, params: Value) -> Value {
    let request = json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params});
    let response = server
        .handle_message(&request.to_string())
        .await
        .expect("request with an id must get a response");
    serde_json::to_value(response).unwrap()
}

/// `tools/call` and return the raw JSON-RPC response.
pub async fn call_tool(server: &McpServer, id: i64, name: &str, arguments: Value) -> Value {
    rpc(
        server,
        id,
        "tools/call",
        json!({"name": name, "arguments": arguments}),
    )
    .await
}

/// Decode the JSON text payload of a successful tool call.
pub fn tool_json(response: &Value) -> Value {
    assert!(
        response.get("error").is_none(),
        "unexpected JSON-RPC error: {}",
        response
    );
    let result = &response["result"];
    assert!(
        result.get("isError").is_none(),
        "unexpected tool failure: {}",
        result
    );
    let text = result["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}
