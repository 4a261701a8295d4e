//! Graph schema for the flight dataset.
//!
//! Defines the default collection and graph names, the logical identifier
//! fields the CSV sources must carry, and the edge definition connecting
//! the node collection to itself.
//!
//! # Graph Structure
//! - **airports**: one document per airport row
//! - **flights**: one edge document per flight row, directed
//!   origin airport -> destination airport
//! - **flightGraph**: named graph declaring `flights` as connecting
//!   `airports` to `airports`

use crate::db::store::EdgeDefinition;

/// Default collection holding airport documents.
pub const NODE_COLLECTION: &str = "airports";

/// Default edge collection holding flight documents.
pub const EDGE_COLLECTION: &str = "flights";

/// Default name of the graph built over the two collections.
pub const GRAPH_NAME: &str = "flightGraph";

/// Logical identifier field required on every node row.
pub const UNIQUE_ID_FIELD: &str = "unique_id";

/// Edge field referencing the origin node's `unique_id`.
pub const ORIGIN_ID_FIELD: &str = "origin_airport_id";

/// Edge field referencing the destination node's `unique_id`.
pub const DEST_ID_FIELD: &str = "dest_airport_id";

/// Builds the edge definitions for the named graph.
///
/// Origin and destination are both drawn from the node collection, so the
/// single definition is self-referential.
pub fn edge_definitions(node_collection: &str, edge_collection: &str) -> Vec<EdgeDefinition> {
    vec![EdgeDefinition {
        collection: edge_collection.to_string(),
        from: vec![node_collection.to_string()],
        to: vec![node_collection.to_string()],
    }]
}

/// Formats the document handle (`collection/key`) used by edge endpoint
/// references.
pub fn document_ref(collection: &str, key: &str) -> String {
    format!("{}/{}", collection, key)
}
