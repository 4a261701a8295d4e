//! ArangoDB REST client implementing the `GraphStore` boundary.
//!
//! Talks to the store's HTTP API: `_api/collection` for collections,
//! `_api/gharial` for named graphs, `_api/document/{collection}` for
//! inserts. Schema calls treat HTTP 409 (already exists) as success, which
//! is what makes them idempotent.

use crate::config::StoreConfig;
use crate::db::store::{EdgeDefinition, GraphStore};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

/// ArangoDB collection type discriminator for document collections.
const DOCUMENT_COLLECTION: u8 = 2;
/// ArangoDB collection type discriminator for edge collections.
const EDGE_COLLECTION: u8 = 3;

/// HTTP client for one ArangoDB database.
pub struct ArangoStore {
    client: Client,
    base_url: String,
    database: String,
    username: Option<String>,
    password: Option<String>,
}

#[derive(Deserialize)]
struct InsertedDocument {
    #[serde(rename = "_key")]
    key: String,
}

impl ArangoStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            database: config.database.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    /// Builds the full URL for an API path within the configured database.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/_db/{}/{}", self.base_url, self.database, path)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.username {
            Some(user) => builder.basic_auth(user, self.password.as_deref()),
            None => builder,
        }
    }

    async fn create_collection(
        &self,
        name: &str,
        kind: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let response = self
            .request(Method::POST, self.endpoint("_api/collection"))
            .json(&collection_payload(name, kind))
            .send()
            .await?;
        accept_existing(response, &format!("create collection {}", name)).await
    }
}

/// Request body for `_api/collection`.
pub(crate) fn collection_payload(name: &str, kind: u8) -> Value {
    json!({ "name": name, "type": kind })
}

/// Request body for `_api/gharial`.
pub(crate) fn graph_payload(name: &str, edge_definitions: &[EdgeDefinition]) -> Value {
    json!({ "name": name, "edgeDefinitions": edge_definitions })
}

/// Treats success and 409 (object already exists) as Ok; everything else
/// becomes an error carrying the response status and body.
async fn accept_existing(
    response: Response,
    action: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = response.status();
    if status.is_success() || status == StatusCode::CONFLICT {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(format!("Failed to {}: {} {}", action, status, body).into())
}

#[async_trait]
impl GraphStore for ArangoStore {
    async fn ensure_collection(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.create_collection(name, DOCUMENT_COLLECTION).await
    }

    async fn ensure_edge_collection(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.create_collection(name, EDGE_COLLECTION).await
    }

    async fn ensure_graph(
        &self,
        name: &str,
        edge_definitions: &[EdgeDefinition],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let response = self
            .request(Method::POST, self.endpoint("_api/gharial"))
            .json(&graph_payload(name, edge_definitions))
            .send()
            .await?;
        accept_existing(response, &format!("create graph {}", name)).await
    }

    async fn insert_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let url = self.endpoint(&format!("_api/document/{}", collection));
        let response = self.request(Method::POST, url).json(&document).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!(
                "Failed to insert document into {}: {} {}",
                collection, status, body
            )
            .into());
        }

        let inserted: InsertedDocument = response.json().await?;
        Ok(inserted.key)
    }
}
