//! In-memory student store with a unique name index, for tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use campus_arango::error::ERROR_UNIQUE_CONSTRAINT_VIOLATED;
use campus_arango::ArangoError;
use campus_core::catalog::seed_student_records;
use campus_core::StudentRecord;

use crate::students::StudentStore;

#[derive(Default)]
pub(crate) struct MemoryStore {
    records: Mutex<Vec<StudentRecord>>,
    fail_reads: AtomicBool,
}

impl MemoryStore {
    pub(crate) fn seeded() -> Self {
        Self {
            records: Mutex::new(seed_student_records()),
            fail_reads: AtomicBool::new(false),
        }
    }

    pub(crate) fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn insert_student(&self, record: &StudentRecord) -> Result<String, ArangoError> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.name == record.name) {
            return Err(ArangoError::Server {
                code: 409,
                error_num: ERROR_UNIQUE_CONSTRAINT_VIOLATED,
                message: format!(
                    "unique constraint violated - in index idx_name of type persistent over 'name'; conflicting key: {}",
                    record.name
                ),
            });
        }
        records.push(record.clone());
        Ok(records.len().to_string())
    }

    async fn student_names(&self) -> Result<Vec<String>, ArangoError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ArangoError::Server {
                code: 500,
                error_num: 4,
                message: "internal error".to_string(),
            });
        }
        let records = self.records.lock().unwrap();
        Ok(records.iter().map(|r| r.name.clone()).collect())
    }
}
