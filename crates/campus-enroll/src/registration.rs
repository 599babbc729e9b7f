//! Registration policy: existence check, enroll, unenroll, list classes.
//!
//! The existence check and the following insert/delete are two separate
//! round trips. This is only safe because a single user drives the menu
//! sequentially; concurrent writers would need a unique index on
//! (`_from`, `_to`) and an insert that relies on it.

use std::fmt;

use async_trait::async_trait;

use campus_arango::{aql, ArangoError, Database};
use campus_core::types::REGISTER_COLLECTION;
use campus_core::{ClassCode, Registration, StudentId};

/// Storage operations the registration policy needs.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Key of the registration edge between the pair, if one exists.
    async fn find_registration(
        &self,
        student: &StudentId,
        class: &ClassCode,
    ) -> Result<Option<String>, ArangoError>;

    /// Insert a registration edge, returning its key.
    async fn insert_registration(&self, registration: &Registration) -> Result<String, ArangoError>;

    /// Delete a registration edge by key.
    async fn remove_registration(&self, key: &str) -> Result<(), ArangoError>;

    /// Titles of vertices reachable from the student within 1..3 hops,
    /// breadth-first, each vertex visited at most once.
    async fn reachable_titles(&self, student: &StudentId) -> Result<Vec<String>, ArangoError>;
}

/// Result of an enroll request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled { key: String },
    AlreadyEnrolled { key: String },
}

impl fmt::Display for EnrollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enrolled { .. } => write!(f, "Student added successfully!"),
            Self::AlreadyEnrolled { .. } => write!(f, "Student already enrolled in class"),
        }
    }
}

/// Result of an unenroll request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnenrollOutcome {
    Removed { key: String },
    NotEnrolled,
}

impl fmt::Display for UnenrollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed { .. } => write!(f, "Student removed successfully!"),
            Self::NotEnrolled => write!(f, "Student wasn't enrolled in class"),
        }
    }
}

/// Register a student for a class unless already registered.
pub async fn enroll<S: RegistrationStore + ?Sized>(
    store: &S,
    student: &StudentId,
    class: &ClassCode,
) -> Result<EnrollOutcome, ArangoError> {
    if let Some(key) = store.find_registration(student, class).await? {
        tracing::debug!(%student, %class, %key, "Registration already present");
        return Ok(EnrollOutcome::AlreadyEnrolled { key });
    }

    let key = store
        .insert_registration(&Registration::new(student, class))
        .await?;
    tracing::info!(%student, %class, %key, "Student enrolled");
    Ok(EnrollOutcome::Enrolled { key })
}

/// Remove a student's registration for a class, if present.
pub async fn unenroll<S: RegistrationStore + ?Sized>(
    store: &S,
    student: &StudentId,
    class: &ClassCode,
) -> Result<UnenrollOutcome, ArangoError> {
    let Some(key) = store.find_registration(student, class).await? else {
        return Ok(UnenrollOutcome::NotEnrolled);
    };

    // The edge can vanish between the lookup and the delete.
    match store.remove_registration(&key).await {
        Ok(()) => {}
        Err(e) if e.is_document_not_found() => {
            tracing::debug!(%student, %class, %key, "Registration removed concurrently");
            return Ok(UnenrollOutcome::NotEnrolled);
        }
        Err(e) => return Err(e),
    }
    tracing::info!(%student, %class, %key, "Student unenrolled");
    Ok(UnenrollOutcome::Removed { key })
}

/// Titles of the classes reachable from a student.
pub async fn list_classes<S: RegistrationStore + ?Sized>(
    store: &S,
    student: &StudentId,
) -> Result<Vec<String>, ArangoError> {
    store.reachable_titles(student).await
}

// ── ArangoDB implementation ──────────────────────────────────────

const FIND_REGISTRATION: &str = "FOR e IN register
  FILTER e._from == @from AND e._to == @to
  LIMIT 1
  RETURN e._key";

/// Traverses the `school` graph; keep in sync with `SCHOOL_GRAPH`.
const CLASSES_OF_STUDENT: &str = "FOR v IN 1..3 OUTBOUND @start GRAPH 'school'
  OPTIONS { order: 'bfs', uniqueVertices: 'global' }
  RETURN v.title";

#[async_trait]
impl RegistrationStore for Database {
    async fn find_registration(
        &self,
        student: &StudentId,
        class: &ClassCode,
    ) -> Result<Option<String>, ArangoError> {
        let q = aql(FIND_REGISTRATION)
            .bind("from", student.vertex_id())
            .bind("to", class.vertex_id());
        let keys: Vec<String> = self.query(&q).await?;
        Ok(keys.into_iter().next())
    }

    async fn insert_registration(&self, registration: &Registration) -> Result<String, ArangoError> {
        let meta = self
            .insert_document(REGISTER_COLLECTION, registration)
            .await?;
        Ok(meta.key)
    }

    async fn remove_registration(&self, key: &str) -> Result<(), ArangoError> {
        self.delete_document(REGISTER_COLLECTION, key).await?;
        Ok(())
    }

    async fn reachable_titles(&self, student: &StudentId) -> Result<Vec<String>, ArangoError> {
        let q = aql(CLASSES_OF_STUDENT).bind("start", student.vertex_id());
        let titles: Vec<Option<String>> = self.query(&q).await?;
        Ok(titles.into_iter().flatten().collect())
    }
}
