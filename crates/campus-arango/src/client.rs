//! Connection management and the per-database handle.

use std::fs;
use std::time::Duration;

use reqwest::{Certificate, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use campus_core::ArangoSettings;

use crate::cert;
use crate::error::{ArangoError, Result};

/// Name of the system database, used for database administration.
pub const SYSTEM_DATABASE: &str = "_system";

/// ArangoDB server client.
///
/// Trusts only the configured CA certificate. Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct ArangoClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
}

impl ArangoClient {
    /// Write the configured CA to disk and build a client that trusts it.
    ///
    /// No request is sent; reachability is checked by [`ArangoClient::open`].
    pub fn connect(settings: &ArangoSettings) -> Result<Self> {
        cert::write_ca_file(&settings.ca, &settings.cert_file)?;

        let pem = fs::read(&settings.cert_file)?;
        let ca = Certificate::from_pem(&pem)
            .map_err(|e| ArangoError::Certificate(format!("invalid PEM: {e}")))?;

        let http = Client::builder()
            .tls_built_in_root_certs(false)
            .add_root_certificate(ca)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ArangoError::Certificate(format!("failed to build TLS client: {e}")))?;

        tracing::info!(host = %settings.base_url(), "ArangoDB client ready");
        Ok(Self {
            http,
            base_url: settings.base_url().to_string(),
            username: settings.username.clone(),
            password: settings.password.clone(),
        })
    }

    /// Handle for a named database. Does not contact the server.
    pub fn db(&self, name: &str) -> Database {
        Database {
            client: self.clone(),
            name: name.to_string(),
        }
    }

    /// Handle for the `_system` database.
    pub fn system_db(&self) -> Database {
        self.db(SYSTEM_DATABASE)
    }

    /// Open a database and confirm it exists by fetching its properties.
    pub async fn open(&self, name: &str) -> Result<Database> {
        let db = self.db(name);
        let props = db.properties().await?;
        tracing::info!(database = %props.name, id = %props.id, "Database selected");
        Ok(db)
    }
}

/// Properties of the current database.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseProperties {
    pub name: String,
    pub id: String,
    #[serde(rename = "isSystem", default)]
    pub is_system: bool,
}

/// `{"result": ...}` response wrapper used by several endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub result: T,
}

/// A logical database on the server.
#[derive(Clone)]
pub struct Database {
    client: ArangoClient,
    name: String,
}

impl Database {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetch database properties. Fails with error 1228 if it does not exist.
    pub async fn properties(&self) -> Result<DatabaseProperties> {
        let envelope: Envelope<DatabaseProperties> =
            send(self.request(Method::GET, "/_api/database/current")).await?;
        Ok(envelope.result)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        database_url(&self.client.base_url, &self.name, path)
    }

    /// Authenticated request against a path within this database.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .http
            .request(method, self.url(path))
            .basic_auth(&self.client.username, Some(&self.client.password))
    }
}

fn database_url(base_url: &str, database: &str, path: &str) -> String {
    format!("{base_url}/_db/{database}{path}")
}

/// Send a request and decode a JSON response, mapping error bodies.
pub(crate) async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let err = ArangoError::from_response(status.as_u16(), &body);
        tracing::debug!(status = status.as_u16(), error = %err, "ArangoDB request failed");
        return Err(err);
    }

    Ok(serde_json::from_slice(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_database_scoped_urls() {
        assert_eq!(
            database_url("https://db.example.com:8529", "esau", "/_api/cursor"),
            "https://db.example.com:8529/_db/esau/_api/cursor"
        );
    }

    #[test]
    fn parses_properties_envelope() {
        let body = r#"{"error":false,"code":200,"result":{"name":"esau","id":"123","path":"none","isSystem":false}}"#;
        let envelope: Envelope<DatabaseProperties> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.result.name, "esau");
        assert_eq!(envelope.result.id, "123");
        assert!(!envelope.result.is_system);
    }

    #[test]
    fn connect_rejects_bad_certificate() {
        let dir = tempfile::tempdir().unwrap();
        let settings = test_settings(dir.path().join("cert_file.crt"), "!!!");
        let err = ArangoClient::connect(&settings).err().unwrap();
        assert!(matches!(err, ArangoError::Certificate(_)));
        assert!(!settings.cert_file.exists());
    }

    fn test_settings(cert_file: std::path::PathBuf, ca: &str) -> ArangoSettings {
        ArangoSettings {
            host: "https://db.example.com:8529/".to_string(),
            ca: ca.to_string(),
            username: "root".to_string(),
            password: String::new(),
            cert_file,
            timeout_secs: 5,
        }
    }
}
