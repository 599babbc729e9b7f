//! Error types for ArangoDB operations.

use serde::Deserialize;

/// ArangoDB error number for an unknown database.
pub const ERROR_DATABASE_NOT_FOUND: u32 = 1228;

/// ArangoDB error number for a unique index violation.
pub const ERROR_UNIQUE_CONSTRAINT_VIOLATED: u32 = 1210;

/// ArangoDB error number for a missing document.
pub const ERROR_DOCUMENT_NOT_FOUND: u32 = 1202;

/// Errors from ArangoDB operations.
#[derive(Debug, thiserror::Error)]
pub enum ArangoError {
    #[error("Certificate error: {0}")]
    Certificate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("[HTTP {code}][ERR {error_num}] {message}")]
    Server {
        code: u16,
        error_num: u32,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Error body returned by the ArangoDB HTTP API.
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    #[serde(default)]
    code: Option<u16>,
    #[serde(rename = "errorNum", default)]
    error_num: u32,
    #[serde(rename = "errorMessage", default)]
    error_message: String,
}

impl ArangoError {
    /// Build a `Server` error from a non-success response.
    ///
    /// Falls back to the raw body text when the server did not send a
    /// JSON error document (e.g. a proxy error page).
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ServerErrorBody>(body) {
            Ok(parsed) => Self::Server {
                code: parsed.code.unwrap_or(status),
                error_num: parsed.error_num,
                message: parsed.error_message,
            },
            Err(_) => Self::Server {
                code: status,
                error_num: 0,
                message: String::from_utf8_lossy(body).trim().to_string(),
            },
        }
    }

    /// ArangoDB error number, if this came from the server.
    pub fn error_num(&self) -> Option<u32> {
        match self {
            Self::Server { error_num, .. } => Some(*error_num),
            _ => None,
        }
    }

    pub fn is_database_not_found(&self) -> bool {
        self.error_num() == Some(ERROR_DATABASE_NOT_FOUND)
    }

    pub fn is_unique_violation(&self) -> bool {
        self.error_num() == Some(ERROR_UNIQUE_CONSTRAINT_VIOLATED)
    }

    pub fn is_document_not_found(&self) -> bool {
        self.error_num() == Some(ERROR_DOCUMENT_NOT_FOUND)
    }
}

pub type Result<T> = std::result::Result<T, ArangoError>;
