//! One-time creation and seeding of the school graph.

use campus_arango::{ArangoError, Database, EdgeDefinition};
use campus_core::catalog::{seed_lecture_vertices, seed_registrations, seed_student_vertices};
use campus_core::types::{LECTURES_COLLECTION, REGISTER_COLLECTION, SCHOOL_GRAPH, STUDENTS_COLLECTION};

/// Counts of what [`seed_school`] inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub students: usize,
    pub lectures: usize,
    pub registrations: usize,
}

/// The single edge definition of the school graph.
pub fn school_edge_definition() -> EdgeDefinition {
    EdgeDefinition {
        collection: REGISTER_COLLECTION.to_string(),
        from: vec![STUDENTS_COLLECTION.to_string()],
        to: vec![LECTURES_COLLECTION.to_string()],
    }
}

/// Create the `school` graph with its collections and insert the fixed data.
///
/// Stops at the first failure. Running it against an already seeded
/// database fails on graph creation with a duplicate-name error.
pub async fn seed_school(db: &Database) -> Result<SeedSummary, ArangoError> {
    db.create_graph(SCHOOL_GRAPH).await?;
    db.add_vertex_collection(SCHOOL_GRAPH, STUDENTS_COLLECTION).await?;
    db.add_vertex_collection(SCHOOL_GRAPH, LECTURES_COLLECTION).await?;
    db.add_edge_definition(SCHOOL_GRAPH, &school_edge_definition())
        .await?;

    let students = seed_student_vertices();
    for student in &students {
        db.insert_document(STUDENTS_COLLECTION, student).await?;
    }

    let lectures = seed_lecture_vertices();
    for lecture in &lectures {
        db.insert_document(LECTURES_COLLECTION, lecture).await?;
    }

    let registrations = seed_registrations();
    for registration in &registrations {
        db.insert_document(REGISTER_COLLECTION, registration).await?;
    }

    let summary = SeedSummary {
        students: students.len(),
        lectures: lectures.len(),
        registrations: registrations.len(),
    };
    tracing::info!(
        database = %db.name(),
        students = summary.students,
        lectures = summary.lectures,
        registrations = summary.registrations,
        "School graph seeded"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_definition_links_students_to_lectures() {
        let def = school_edge_definition();
        assert_eq!(def.collection, "register");
        assert_eq!(def.from, vec!["students"]);
        assert_eq!(def.to, vec!["lectures"]);
    }
}
