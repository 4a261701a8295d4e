//! The boundary between the import run and the graph store.
//!
//! Everything the importer needs from the store fits in four operations:
//! three idempotent schema provisioners and a document insert that hands
//! back the store-generated key.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// One edge-definition entry of a named graph: which node collections an
/// edge collection connects, and in which direction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeDefinition {
    pub collection: String,
    pub from: Vec<String>,
    pub to: Vec<String>,
}

#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Create the named document collection if it does not exist yet.
    async fn ensure_collection(&self, name: &str) -> Result<(), Box<dyn std::error::Error>>;

    /// Create the named edge collection if it does not exist yet.
    async fn ensure_edge_collection(&self, name: &str) -> Result<(), Box<dyn std::error::Error>>;

    /// Create the named graph over the given edge definitions if it does
    /// not exist yet.
    async fn ensure_graph(
        &self,
        name: &str,
        edge_definitions: &[EdgeDefinition],
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Insert a document into a collection and return the key the store
    /// generated for it.
    async fn insert_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, Box<dyn std::error::Error>>;
}
