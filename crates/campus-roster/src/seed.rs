//! One-time creation and seeding of the roster database.

use campus_arango::{ArangoClient, ArangoError, CollectionType};
use campus_core::catalog::seed_student_records;
use campus_core::types::STUDENTS_COLLECTION;

/// Create `database`, its `students` collection with a unique name index,
/// and insert the fixed records. Returns the number of records inserted.
///
/// Not idempotent: an existing database fails the first step.
pub async fn seed_roster(client: &ArangoClient, database: &str) -> Result<usize, ArangoError> {
    client.system_db().create_database(database).await?;

    let db = client.db(database);
    db.create_collection(STUDENTS_COLLECTION, CollectionType::Document)
        .await?;
    db.add_persistent_index(STUDENTS_COLLECTION, &["name"], true)
        .await?;

    let records = seed_student_records();
    for record in &records {
        db.insert_document(STUDENTS_COLLECTION, record).await?;
    }

    tracing::info!(database, students = records.len(), "Roster seeded");
    Ok(records.len())
}
