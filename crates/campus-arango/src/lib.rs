//! Campus Arango — minimal ArangoDB HTTP client.
//!
//! Covers exactly what the Campus programs need: a TLS client trusting a
//! supplied CA, database selection, collection/index/graph setup, document
//! insert and delete, and AQL cursor execution. Every call is a single
//! request/response round trip; there is no retry.

pub mod admin;
pub mod aql;
pub mod cert;
pub mod client;
pub mod documents;
pub mod error;

pub use admin::{CollectionType, EdgeDefinition};
pub use aql::{aql, AqlQuery};
pub use client::{ArangoClient, Database, DatabaseProperties};
pub use documents::DocumentMeta;
pub use error::ArangoError;
