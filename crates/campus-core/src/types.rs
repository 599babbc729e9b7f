//! Document types stored in ArangoDB.
//!
//! Field names follow ArangoDB conventions: `_key` is the document key
//! within its collection, `_from`/`_to` are full document handles
//! (`<collection>/<key>`) on edge documents.

use serde::{Deserialize, Serialize};

/// Vertex collection holding students.
pub const STUDENTS_COLLECTION: &str = "students";

/// Vertex collection holding lectures.
pub const LECTURES_COLLECTION: &str = "lectures";

/// Edge collection linking students to lectures.
pub const REGISTER_COLLECTION: &str = "register";

/// Named graph over students, lectures, and registrations.
pub const SCHOOL_GRAPH: &str = "school";

// ── Identifiers ───────────────────────────────────────────────────

/// Short student identifier, e.g. `"01"`. Doubles as the vertex key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Full document handle of the student vertex.
    pub fn vertex_id(&self) -> String {
        format!("{STUDENTS_COLLECTION}/{}", self.0)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Class code, e.g. `"MAT101"`. Doubles as the lecture vertex key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassCode(pub String);

impl ClassCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Full document handle of the lecture vertex.
    pub fn vertex_id(&self) -> String {
        format!("{LECTURES_COLLECTION}/{}", self.0)
    }
}

impl std::fmt::Display for ClassCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Documents ─────────────────────────────────────────────────────

/// A student vertex in the school graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentVertex {
    #[serde(rename = "_key")]
    pub key: String,
    pub full_name: String,
}

/// A lecture vertex in the school graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureVertex {
    #[serde(rename = "_key")]
    pub key: String,
    pub title: String,
}

/// A registration edge from a student vertex to a lecture vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "_from")]
    pub from: String,
    #[serde(rename = "_to")]
    pub to: String,
}

impl Registration {
    pub fn new(student: &StudentId, class: &ClassCode) -> Self {
        Self {
            from: student.vertex_id(),
            to: class.vertex_id(),
        }
    }
}

/// A plain student document with a uniquely indexed name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub age: i64,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}
