//! Database layer for the flight-graph importer.
//!
//! The graph store is an external collaborator reached over its HTTP API.
//! This module provides:
//! - The `GraphStore` boundary consumed by the import run
//! - An ArangoDB REST client implementing that boundary
//! - Graph schema definition (collection names, required CSV fields,
//!   edge definitions)
//! - The two-phase node/edge import with logical-id remapping

pub mod client;
pub mod ingestion;
pub mod schema;
pub mod store;

#[cfg(test)]
pub mod tests;
