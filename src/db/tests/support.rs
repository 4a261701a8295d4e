//! In-memory `GraphStore` double used by the db tests.
//!
//! Keys are generated from a monotonically increasing counter, mirroring a
//! store that assigns numeric string keys. An optional failure trigger
//! lets tests exercise the fail-fast insert path.

use crate::db::store::{EdgeDefinition, GraphStore};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct MemoryCollection {
    edge: bool,
    documents: Vec<(String, Value)>,
}

#[derive(Default)]
struct MemoryState {
    collections: HashMap<String, MemoryCollection>,
    graphs: HashMap<String, Vec<EdgeDefinition>>,
    next_key: u64,
    inserts_until_failure: Option<usize>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `insert_document` fail after `n` more successful inserts.
    pub fn fail_after(&self, n: usize) {
        self.state.lock().unwrap().inserts_until_failure = Some(n);
    }

    pub fn collection_count(&self) -> usize {
        self.state.lock().unwrap().collections.len()
    }

    pub fn is_edge_collection(&self, name: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(name)
            .map(|c| c.edge)
            .unwrap_or(false)
    }

    /// All documents of a collection, in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .map(|c| c.documents.iter().map(|(_, doc)| doc.clone()).collect())
            .unwrap_or_default()
    }

    /// `(key, document)` pairs of a collection, in insertion order.
    pub fn keyed_documents(&self, collection: &str) -> Vec<(String, Value)> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .map(|c| c.documents.clone())
            .unwrap_or_default()
    }

    pub fn graph_count(&self) -> usize {
        self.state.lock().unwrap().graphs.len()
    }

    pub fn graph_definitions(&self, name: &str) -> Option<Vec<EdgeDefinition>> {
        self.state.lock().unwrap().graphs.get(name).cloned()
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn ensure_collection(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.state.lock().unwrap();
        state
            .collections
            .entry(name.to_string())
            .or_insert_with(MemoryCollection::default);
        Ok(())
    }

    async fn ensure_edge_collection(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.state.lock().unwrap();
        state
            .collections
            .entry(name.to_string())
            .or_insert_with(|| MemoryCollection {
                edge: true,
                documents: Vec::new(),
            });
        Ok(())
    }

    async fn ensure_graph(
        &self,
        name: &str,
        edge_definitions: &[EdgeDefinition],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut state = self.state.lock().unwrap();
        state
            .graphs
            .entry(name.to_string())
            .or_insert_with(|| edge_definitions.to_vec());
        Ok(())
    }

    async fn insert_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let mut state = self.state.lock().unwrap();

        if let Some(remaining) = state.inserts_until_failure {
            if remaining == 0 {
                return Err("simulated store write failure".into());
            }
            state.inserts_until_failure = Some(remaining - 1);
        }

        state.next_key += 1;
        let key = state.next_key.to_string();

        let entry = state
            .collections
            .get_mut(collection)
            .ok_or_else(|| format!("unknown collection: {}", collection))?;
        entry.documents.push((key.clone(), document));

        Ok(key)
    }
}
