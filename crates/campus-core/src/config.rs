//! ArangoDB connection settings.
//!
//! Settings are loaded from (in priority order):
//! 1. Environment variables (`ARANGO_` prefix, e.g. `ARANGO_HOST`)
//! 2. Config file (`campus.toml` by default, optional)
//! 3. Defaults

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{CampusError, Result};

/// Connection settings shared by both programs.
#[derive(Clone, Deserialize)]
pub struct ArangoSettings {
    /// Server endpoint, e.g. `https://abc123.arangodb.cloud:8529`.
    #[serde(default)]
    pub host: String,

    /// Base64-encoded PEM certificate authority.
    #[serde(default)]
    pub ca: String,

    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Where the decoded certificate is written for the client to trust.
    #[serde(default = "default_cert_file")]
    pub cert_file: PathBuf,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_username() -> String {
    "root".to_string()
}

fn default_cert_file() -> PathBuf {
    PathBuf::from("cert_file.crt")
}

fn default_timeout_secs() -> u64 {
    30
}

impl ArangoSettings {
    /// Load settings from `<file_prefix>.toml` (if present) and the environment.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = ::config::Config::builder()
            .add_source(::config::File::with_name(file_prefix).required(false))
            .add_source(::config::Environment::with_prefix("ARANGO"))
            .build()?;

        Self::from_config(cfg)
    }

    /// Deserialize and validate settings from an already-built config.
    pub fn from_config(cfg: ::config::Config) -> Result<Self> {
        let settings: Self = cfg.try_deserialize()?;

        if settings.host.trim().is_empty() {
            return Err(CampusError::MissingSetting("ARANGO_HOST"));
        }
        if settings.ca.trim().is_empty() {
            return Err(CampusError::MissingSetting("ARANGO_CA"));
        }

        tracing::debug!(
            host = %settings.host,
            username = %settings.username,
            cert_file = %settings.cert_file.display(),
            "Loaded ArangoDB settings"
        );
        Ok(settings)
    }

    /// Host with any trailing slash removed, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.host.trim().trim_end_matches('/')
    }
}

impl std::fmt::Debug for ArangoSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArangoSettings")
            .field("host", &self.host)
            .field("ca", &format_args!("<{} bytes>", self.ca.len()))
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("cert_file", &self.cert_file)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ::config::ConfigBuilder<::config::builder::DefaultState> {
        ::config::Config::builder()
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let cfg = builder()
            .set_override("host", "https://db.example.com:8529/")
            .unwrap()
            .set_override("ca", "Zm9v")
            .unwrap()
            .build()
            .unwrap();

        let settings = ArangoSettings::from_config(cfg).unwrap();
        assert_eq!(settings.username, "root");
        assert_eq!(settings.password, "");
        assert_eq!(settings.cert_file, PathBuf::from("cert_file.crt"));
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.base_url(), "https://db.example.com:8529");
    }

    #[test]
    fn missing_host_is_rejected() {
        let cfg = builder().set_override("ca", "Zm9v").unwrap().build().unwrap();
        let err = ArangoSettings::from_config(cfg).unwrap_err();
        assert!(matches!(err, CampusError::MissingSetting("ARANGO_HOST")));
    }

    #[test]
    fn missing_ca_is_rejected() {
        let cfg = builder()
            .set_override("host", "https://db.example.com")
            .unwrap()
            .build()
            .unwrap();
        let err = ArangoSettings::from_config(cfg).unwrap_err();
        assert!(matches!(err, CampusError::MissingSetting("ARANGO_CA")));
    }

    #[test]
    fn loads_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.toml");
        std::fs::write(
            &path,
            r#"
host = "https://db.example.com:8529"
ca = "Zm9v"
username = "esau"
password = "secret"
cert_file = "ca.pem"
timeout_secs = 5
"#,
        )
        .unwrap();

        let cfg = builder()
            .add_source(::config::File::from(path))
            .build()
            .unwrap();
        let settings = ArangoSettings::from_config(cfg).unwrap();
        assert_eq!(settings.username, "esau");
        assert_eq!(settings.password, "secret");
        assert_eq!(settings.cert_file, PathBuf::from("ca.pem"));
        assert_eq!(settings.timeout_secs, 5);
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let cfg = builder()
            .set_override("host", "https://db.example.com")
            .unwrap()
            .set_override("ca", "Zm9v")
            .unwrap()
            .set_override("password", "hunter2")
            .unwrap()
            .build()
            .unwrap();
        let settings = ArangoSettings::from_config(cfg).unwrap();
        let debug = format!("{settings:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
