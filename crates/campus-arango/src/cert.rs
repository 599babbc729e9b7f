//! CA certificate handling.
//!
//! The certificate authority arrives base64-encoded in `ARANGO_CA`. It is
//! decoded and written to a local file which the HTTP client then trusts.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{ArangoError, Result};

/// Decode a base64-encoded PEM certificate.
///
/// Line breaks and surrounding whitespace in the encoded value are ignored.
pub fn decode_ca(encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ArangoError::Certificate("empty certificate".to_string()));
    }

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ArangoError::Certificate(format!("invalid base64: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| ArangoError::Certificate(format!("certificate is not UTF-8 text: {e}")))
}

/// Decode the certificate and write it to `path`, replacing any existing file.
pub fn write_ca_file(encoded: &str, path: &Path) -> Result<()> {
    let pem = decode_ca(encoded)?;
    fs::write(path, pem)?;

    tracing::debug!(path = %path.display(), "CA certificate written");
    Ok(())
}
