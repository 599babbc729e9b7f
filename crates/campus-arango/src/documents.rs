//! Single-document writes.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{send, Database};
use crate::error::Result;

/// Identity of a stored document as returned by write operations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentMeta {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_rev")]
    pub rev: String,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

impl Database {
    /// Insert a document (or edge) into a collection.
    pub async fn insert_document<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        document: &T,
    ) -> Result<DocumentMeta> {
        let meta: DocumentMeta = send(
            self.request(Method::POST, &format!("/_api/document/{collection}"))
                .json(document),
        )
        .await?;

        tracing::debug!(id = %meta.id, "Document inserted");
        Ok(meta)
    }

    /// Delete a document by key.
    pub async fn delete_document(&self, collection: &str, key: &str) -> Result<DocumentMeta> {
        let meta: DocumentMeta = send(
            self.request(Method::DELETE, &format!("/_api/document/{collection}/{key}")),
        )
        .await?;

        tracing::debug!(id = %meta.id, "Document deleted");
        Ok(meta)
    }

    /// Number of documents in a collection.
    pub async fn document_count(&self, collection: &str) -> Result<u64> {
        let resp: CountResponse = send(
            self.request(Method::GET, &format!("/_api/collection/{collection}/count")),
        )
        .await?;
        Ok(resp.count)
    }
}
