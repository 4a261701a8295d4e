//! Two-phase CSV-to-graph import with logical-id remapping.
//!
//! Phase 1 inserts every node row and records the mapping from the row's
//! `unique_id` to the key the store generated for it. Phase 2 inserts every
//! edge row whose two endpoints resolve through that mapping, rewriting the
//! logical identifiers into `collection/key` references. Edges with a
//! dangling endpoint are skipped with a warning; every other failure is
//! fatal and aborts the rest of the run without rollback.

use crate::config::GraphConfig;
use crate::db::schema;
use crate::db::store::GraphStore;
use crate::logger;
use crate::parser::{self, Record};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

/// Counters reported after a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub nodes_inserted: usize,
    pub edges_inserted: usize,
    pub edges_skipped: usize,
}

/// Run-scoped import state: the identifier map and the summary counters.
///
/// Owned exclusively by one import run and discarded with it; nothing here
/// outlives the run or is shared between runs.
#[derive(Default)]
pub struct ImportContext {
    key_map: HashMap<String, String>,
    pub nodes_inserted: usize,
    pub edges_inserted: usize,
    pub edges_skipped: usize,
}

impl ImportContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the store-generated key for a logical identifier.
    pub fn resolve(&self, logical_id: &str) -> Option<&str> {
        self.key_map.get(logical_id).map(String::as_str)
    }

    /// Records `logical_id -> generated_key`. Returns true when an earlier
    /// mapping was overwritten (duplicate logical identifier in the source).
    pub fn record_key(&mut self, logical_id: String, generated_key: String) -> bool {
        self.key_map.insert(logical_id, generated_key).is_some()
    }

    /// Number of logical identifiers currently mapped.
    pub fn mapped_nodes(&self) -> usize {
        self.key_map.len()
    }

    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            nodes_inserted: self.nodes_inserted,
            edges_inserted: self.edges_inserted,
            edges_skipped: self.edges_skipped,
        }
    }
}

/// Provisions the node collection, edge collection, and named graph.
///
/// Each call is idempotent on the store side; existing objects are left
/// untouched. Called exactly once per run, before any insert.
pub async fn ensure_schema(
    store: &dyn GraphStore,
    graph: &GraphConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    store.ensure_collection(&graph.node_collection).await?;
    store.ensure_edge_collection(&graph.edge_collection).await?;

    let definitions = schema::edge_definitions(&graph.node_collection, &graph.edge_collection);
    store.ensure_graph(&graph.graph_name, &definitions).await?;

    Ok(())
}

/// Inserts node records in file order and populates the identifier map.
///
/// Every record becomes one document. A record carrying `unique_id` adds a
/// map entry; a duplicate identifier overwrites the earlier entry
/// (last-write-wins) and is reported as a warning. A record without
/// `unique_id` is still inserted but stays unreachable for edges.
///
/// # Errors
/// A store insert failure aborts immediately; records already written stay
/// in the store (no rollback).
pub async fn import_nodes(
    store: &dyn GraphStore,
    collection: &str,
    records: Vec<Record>,
    context: &mut ImportContext,
) -> Result<(), Box<dyn std::error::Error>> {
    for record in records {
        let logical_id = record.get(schema::UNIQUE_ID_FIELD).cloned();
        let document = serde_json::to_value(&record)?;
        let generated_key = store.insert_document(collection, document).await?;
        context.nodes_inserted += 1;

        match logical_id {
            Some(id) => {
                if context.record_key(id.clone(), generated_key) {
                    logger::warn(&duplicate_node_warning(&id));
                }
            }
            None => logger::warn(&unmapped_node_warning(&generated_key)),
        }
    }

    Ok(())
}

/// Inserts edge records whose endpoints both resolve through the map.
///
/// A resolvable record becomes one edge document carrying `_from`/`_to`
/// references followed by all original CSV fields. A record with an
/// unresolved endpoint is skipped with one warning naming both logical
/// identifiers; the run continues. Parallel edges are not deduplicated
/// (the target is a multigraph).
pub async fn import_edges(
    store: &dyn GraphStore,
    graph: &GraphConfig,
    records: Vec<Record>,
    context: &mut ImportContext,
) -> Result<(), Box<dyn std::error::Error>> {
    for record in records {
        let origin_id = record.get(schema::ORIGIN_ID_FIELD);
        let dest_id = record.get(schema::DEST_ID_FIELD);

        let origin_key = origin_id.and_then(|id| context.resolve(id));
        let dest_key = dest_id.and_then(|id| context.resolve(id));

        match (origin_key, dest_key) {
            (Some(from_key), Some(to_key)) => {
                let mut document = Record::new();
                document.insert(
                    "_from".to_string(),
                    schema::document_ref(&graph.node_collection, from_key),
                );
                document.insert(
                    "_to".to_string(),
                    schema::document_ref(&graph.node_collection, to_key),
                );
                for (field, value) in &record {
                    document.insert(field.clone(), value.clone());
                }

                let document = serde_json::to_value(&document)?;
                store.insert_document(&graph.edge_collection, document).await?;
                context.edges_inserted += 1;
            }
            _ => {
                logger::warn(&skipped_edge_warning(
                    origin_id.map(String::as_str),
                    dest_id.map(String::as_str),
                ));
                context.edges_skipped += 1;
            }
        }
    }

    Ok(())
}

/// Runs one complete import: read both files, provision the schema, insert
/// all nodes, then all edges.
///
/// Both CSV files are read up front, so an unreadable source aborts before
/// anything is written. The two insert phases never interleave: every edge
/// is processed against the fully populated identifier map.
///
/// Re-running against a non-empty store duplicates all node and edge
/// documents; only the schema provisioning is idempotent.
///
/// # Arguments
/// * `store` - The graph store collaborator
/// * `graph` - Collection and graph names for this run
/// * `nodes_path` - Node CSV file (must carry `unique_id`)
/// * `edges_path` - Edge CSV file (must carry `origin_airport_id` and
///   `dest_airport_id`)
///
/// # Returns
/// The summary counters for the completed run
pub async fn run_import(
    store: &dyn GraphStore,
    graph: &GraphConfig,
    nodes_path: &Path,
    edges_path: &Path,
) -> Result<ImportSummary, Box<dyn std::error::Error>> {
    let node_records = parser::read_records(nodes_path)?;
    let edge_records = parser::read_records(edges_path)?;
    logger::info(&format!(
        "Parsed {} node rows and {} edge rows",
        node_records.len(),
        edge_records.len()
    ));

    ensure_schema(store, graph).await?;

    let mut context = ImportContext::new();

    let start = Instant::now();
    import_nodes(store, &graph.node_collection, node_records, &mut context).await?;
    logger::info(&format!(
        "Imported {} nodes in {}ms",
        context.nodes_inserted,
        start.elapsed().as_millis()
    ));

    let start = Instant::now();
    import_edges(store, graph, edge_records, &mut context).await?;
    logger::info(&format!(
        "Imported {} edges ({} skipped) in {}ms",
        context.edges_inserted,
        context.edges_skipped,
        start.elapsed().as_millis()
    ));

    Ok(context.summary())
}

/// Warning for an edge skipped over an unresolved endpoint; names both
/// logical identifiers so the dangling side can be found in the source.
pub(crate) fn skipped_edge_warning(origin_id: Option<&str>, dest_id: Option<&str>) -> String {
    format!(
        "Skipping edge due to missing nodes: origin={}, dest={}",
        origin_id.unwrap_or("(missing)"),
        dest_id.unwrap_or("(missing)")
    )
}

/// Warning for a node row whose `unique_id` repeats an earlier row.
pub(crate) fn duplicate_node_warning(logical_id: &str) -> String {
    format!(
        "Duplicate {} {}: edges will reference the newest document",
        schema::UNIQUE_ID_FIELD,
        logical_id
    )
}

/// Warning for a node row with no `unique_id` at all.
pub(crate) fn unmapped_node_warning(generated_key: &str) -> String {
    format!(
        "Node document {} has no {} field and cannot be referenced by edges",
        generated_key,
        schema::UNIQUE_ID_FIELD
    )
}
