//! Run configuration loaded from a JSON file.
//!
//! Every section has defaults matching the flight dataset, so an empty
//! `{}` config (or a missing section) still yields a usable setup against
//! a local ArangoDB instance.

use crate::db::schema;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

/// Connection settings for the graph store's HTTP API.
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8529".to_string(),
            database: "_system".to_string(),
            username: None,
            password: None,
        }
    }
}

/// Names of the collections and the named graph built over them.
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct GraphConfig {
    pub node_collection: String,
    pub edge_collection: String,
    pub graph_name: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_collection: schema::NODE_COLLECTION.to_string(),
            edge_collection: schema::EDGE_COLLECTION.to_string(),
            graph_name: schema::GRAPH_NAME.to_string(),
        }
    }
}

/// Default locations of the two source CSV files.
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct ImportConfig {
    pub nodes_path: String,
    pub edges_path: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            nodes_path: "import/airports.csv".to_string(),
            edges_path: "import/flights.csv".to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(Into::into)
}
