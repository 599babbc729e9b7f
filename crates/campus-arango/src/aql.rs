//! AQL query builder and cursor execution.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{send, Database};
use crate::error::{ArangoError, Result};

/// An AQL query with bind parameters.
///
/// ```
/// use campus_arango::aql;
///
/// let q = aql("FOR doc IN students FILTER doc.name == @name RETURN doc")
///     .bind("name", "jane");
/// assert_eq!(q.text(), "FOR doc IN students FILTER doc.name == @name RETURN doc");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AqlQuery {
    query: String,
    #[serde(rename = "bindVars", skip_serializing_if = "Map::is_empty")]
    bind_vars: Map<String, Value>,
}

/// Start building an AQL query.
pub fn aql(query: impl Into<String>) -> AqlQuery {
    AqlQuery {
        query: query.into(),
        bind_vars: Map::new(),
    }
}

impl AqlQuery {
    /// Bind `@name` to a value.
    pub fn bind(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.bind_vars.insert(name.to_string(), value.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Deserialize)]
struct CursorBatch<T> {
    #[serde(default = "Vec::new")]
    result: Vec<T>,
    #[serde(rename = "hasMore", default)]
    has_more: bool,
    #[serde(default)]
    id: Option<String>,
}

impl Database {
    /// Execute a query and collect every row, following the cursor to the end.
    pub async fn query<T: DeserializeOwned>(&self, query: &AqlQuery) -> Result<Vec<T>> {
        tracing::debug!(aql = %query.text(), "Executing AQL");

        let mut batch: CursorBatch<T> =
            send(self.request(Method::POST, "/_api/cursor").json(query)).await?;
        let mut rows = std::mem::take(&mut batch.result);

        while batch.has_more {
            let id = batch.id.take().ok_or_else(|| {
                ArangoError::Protocol("cursor reports more results but has no id".to_string())
            })?;
            batch = send(self.request(Method::PUT, &format!("/_api/cursor/{id}"))).await?;
            rows.append(&mut batch.result);
            if batch.id.is_none() {
                batch.id = Some(id);
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_request_body() {
        let q = aql("FOR e IN register FILTER e._from == @from RETURN e._key")
            .bind("from", "students/01");
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({
                "query": "FOR e IN register FILTER e._from == @from RETURN e._key",
                "bindVars": {"from": "students/01"}
            })
        );
    }

    #[test]
    fn omits_empty_bind_vars() {
        let q = aql("FOR doc IN students RETURN doc");
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({"query": "FOR doc IN students RETURN doc"})
        );
    }

    #[test]
    fn parses_final_batch() {
        let body = r#"{"result":["Calculus","Statistics"],"hasMore":false,"cached":false,"error":false,"code":201}"#;
        let batch: CursorBatch<String> = serde_json::from_str(body).unwrap();
        assert_eq!(batch.result, vec!["Calculus", "Statistics"]);
        assert!(!batch.has_more);
        assert!(batch.id.is_none());
    }

    #[test]
    fn parses_partial_batch() {
        let body = r#"{"result":[{"name":"jane"}],"hasMore":true,"id":"26011191","error":false,"code":201}"#;
        let batch: CursorBatch<Value> = serde_json::from_str(body).unwrap();
        assert!(batch.has_more);
        assert_eq!(batch.id.as_deref(), Some("26011191"));
    }
}
