//! Schema setup: databases, collections, indexes, and named graphs.
//!
//! None of these calls are idempotent. Creating something that already
//! exists fails with the server's duplicate-name error.

use reqwest::Method;
use serde::Serialize;
use serde_json::json;

use crate::client::{send, Database};
use crate::error::Result;

/// ArangoDB collection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionType {
    Document,
    Edge,
}

impl CollectionType {
    fn code(self) -> u8 {
        match self {
            Self::Document => 2,
            Self::Edge => 3,
        }
    }
}

/// Edge collection plus the vertex collections it may connect.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeDefinition {
    pub collection: String,
    pub from: Vec<String>,
    pub to: Vec<String>,
}

impl Database {
    // ── Databases ────────────────────────────────────────────────

    /// Create a database. Must be called on the `_system` database.
    pub async fn create_database(&self, name: &str) -> Result<()> {
        let _: serde_json::Value = send(
            self.request(Method::POST, "/_api/database")
                .json(&json!({ "name": name })),
        )
        .await?;

        tracing::info!(database = name, "Database created");
        Ok(())
    }

    // ── Collections & indexes ────────────────────────────────────

    pub async fn create_collection(&self, name: &str, kind: CollectionType) -> Result<()> {
        let _: serde_json::Value = send(
            self.request(Method::POST, "/_api/collection")
                .json(&json!({ "name": name, "type": kind.code() })),
        )
        .await?;

        tracing::info!(database = %self.name(), collection = name, ?kind, "Collection created");
        Ok(())
    }

    /// Add a persistent index over `fields`, optionally unique.
    pub async fn add_persistent_index(
        &self,
        collection: &str,
        fields: &[&str],
        unique: bool,
    ) -> Result<()> {
        let _: serde_json::Value = send(
            self.request(Method::POST, "/_api/index")
                .query(&[("collection", collection)])
                .json(&json!({ "type": "persistent", "fields": fields, "unique": unique })),
        )
        .await?;

        tracing::info!(collection, ?fields, unique, "Persistent index added");
        Ok(())
    }

    // ── Named graphs ─────────────────────────────────────────────

    /// Create an empty named graph.
    pub async fn create_graph(&self, name: &str) -> Result<()> {
        let _: serde_json::Value = send(
            self.request(Method::POST, "/_api/gharial")
                .json(&json!({ "name": name })),
        )
        .await?;

        tracing::info!(graph = name, "Graph created");
        Ok(())
    }

    /// Add a vertex collection to a graph, creating the collection if needed.
    pub async fn add_vertex_collection(&self, graph: &str, collection: &str) -> Result<()> {
        let _: serde_json::Value = send(
            self.request(Method::POST, &format!("/_api/gharial/{graph}/vertex"))
                .json(&json!({ "collection": collection })),
        )
        .await?;

        tracing::info!(graph, collection, "Vertex collection added");
        Ok(())
    }

    /// Add an edge definition to a graph, creating the edge collection if needed.
    pub async fn add_edge_definition(&self, graph: &str, definition: &EdgeDefinition) -> Result<()> {
        let _: serde_json::Value = send(
            self.request(Method::POST, &format!("/_api/gharial/{graph}/edge"))
                .json(definition),
        )
        .await?;

        tracing::info!(graph, collection = %definition.collection, "Edge definition added");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_type_codes() {
        assert_eq!(CollectionType::Document.code(), 2);
        assert_eq!(CollectionType::Edge.code(), 3);
    }

    #[test]
    fn edge_definition_wire_shape() {
        let def = EdgeDefinition {
            collection: "register".to_string(),
            from: vec!["students".to_string()],
            to: vec!["lectures".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            json!({"collection": "register", "from": ["students"], "to": ["lectures"]})
        );
    }
}
