//! campus-core: Shared types, reference data, and plumbing for the Campus demos.
//!
//! This crate provides the pieces both interactive programs build on:
//! - Document types for students, lectures, and registrations
//! - The fixed class catalog, student roster, and seed records
//! - ArangoDB connection settings loaded from file and environment
//! - A line-oriented console used by the menu loops
//! - Common error types

pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod types;

pub use crate::catalog::{ReferenceTable, CLASS_CATALOG, STUDENT_ROSTER};
pub use crate::config::ArangoSettings;
pub use crate::console::Console;
pub use crate::error::CampusError;
pub use crate::types::{ClassCode, LectureVertex, Registration, StudentId, StudentRecord, StudentVertex};
