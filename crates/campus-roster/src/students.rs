//! Add and list students.

use std::num::ParseIntError;

use async_trait::async_trait;
use serde::Deserialize;

use campus_arango::{aql, ArangoError, Database};
use campus_core::types::STUDENTS_COLLECTION;
use campus_core::StudentRecord;

/// Storage operations the roster needs.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a student, returning the new document key.
    async fn insert_student(&self, record: &StudentRecord) -> Result<String, ArangoError>;

    /// Names of every stored student, in server order.
    async fn student_names(&self) -> Result<Vec<String>, ArangoError>;
}

/// Parse an age typed at the prompt. Any integer is accepted, negatives included.
pub fn parse_age(input: &str) -> Result<i64, ParseIntError> {
    input.trim().parse()
}

/// Insert a student. Duplicate names fail with a unique-constraint error.
pub async fn add_student<S: StudentStore + ?Sized>(
    store: &S,
    record: &StudentRecord,
) -> Result<String, ArangoError> {
    let key = store.insert_student(record).await?;
    tracing::info!(name = %record.name, age = record.age, %key, "Student added");
    Ok(key)
}

pub async fn list_students<S: StudentStore + ?Sized>(store: &S) -> Result<Vec<String>, ArangoError> {
    store.student_names().await
}

// ── ArangoDB implementation ──────────────────────────────────────

const ALL_STUDENTS: &str = "FOR doc IN students RETURN doc";

#[derive(Deserialize)]
struct NamedDocument {
    name: String,
}

#[async_trait]
impl StudentStore for Database {
    async fn insert_student(&self, record: &StudentRecord) -> Result<String, ArangoError> {
        let meta = self.insert_document(STUDENTS_COLLECTION, record).await?;
        Ok(meta.key)
    }

    async fn student_names(&self) -> Result<Vec<String>, ArangoError> {
        let docs: Vec<NamedDocument> = self.query(&aql(ALL_STUDENTS)).await?;
        Ok(docs.into_iter().map(|d| d.name).collect())
    }
}
