//! In-memory registration store for tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use campus_arango::error::ERROR_DOCUMENT_NOT_FOUND;
use campus_arango::ArangoError;
use campus_core::catalog::{seed_lecture_vertices, seed_registrations};
use campus_core::{ClassCode, Registration, StudentId};

use crate::registration::RegistrationStore;

struct Edge {
    key: String,
    from: String,
    to: String,
}

#[derive(Default)]
struct State {
    titles: HashMap<String, String>,
    edges: Vec<Edge>,
    next_key: u64,
    fail_writes: bool,
    fail_reads: bool,
    delete_before_remove: bool,
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    /// Store pre-loaded with the seeded school graph.
    pub(crate) fn school() -> Self {
        let store = Self::default();
        for lecture in seed_lecture_vertices() {
            store.add_vertex(&format!("lectures/{}", lecture.key), &lecture.title);
        }
        for reg in seed_registrations() {
            store.add_edge(&reg.from, &reg.to);
        }
        store
    }

    pub(crate) fn add_vertex(&self, id: &str, title: &str) {
        let mut state = self.state.lock().unwrap();
        state.titles.insert(id.to_string(), title.to_string());
    }

    pub(crate) fn add_edge(&self, from: &str, to: &str) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_key += 1;
        let key = state.next_key.to_string();
        state.edges.push(Edge {
            key: key.clone(),
            from: from.to_string(),
            to: to.to_string(),
        });
        key
    }

    pub(crate) fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub(crate) fn fail_reads(&self) {
        self.state.lock().unwrap().fail_reads = true;
    }

    /// Make the next removal find its edge already deleted by someone else.
    pub(crate) fn delete_before_remove(&self) {
        self.state.lock().unwrap().delete_before_remove = true;
    }

    pub(crate) fn edge_count(&self, student: &StudentId, class: &ClassCode) -> usize {
        let (from, to) = (student.vertex_id(), class.vertex_id());
        let state = self.state.lock().unwrap();
        state
            .edges
            .iter()
            .filter(|e| e.from == from && e.to == to)
            .count()
    }

    pub(crate) fn total_edges(&self) -> usize {
        self.state.lock().unwrap().edges.len()
    }
}

fn read_refused() -> ArangoError {
    ArangoError::Server {
        code: 500,
        error_num: 4,
        message: "internal error".to_string(),
    }
}

fn write_refused() -> ArangoError {
    ArangoError::Server {
        code: 503,
        error_num: 503,
        message: "service unavailable".to_string(),
    }
}

#[async_trait]
impl RegistrationStore for MemoryStore {
    async fn find_registration(
        &self,
        student: &StudentId,
        class: &ClassCode,
    ) -> Result<Option<String>, ArangoError> {
        let (from, to) = (student.vertex_id(), class.vertex_id());
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(read_refused());
        }
        Ok(state
            .edges
            .iter()
            .find(|e| e.from == from && e.to == to)
            .map(|e| e.key.clone()))
    }

    async fn insert_registration(&self, registration: &Registration) -> Result<String, ArangoError> {
        if self.state.lock().unwrap().fail_writes {
            return Err(write_refused());
        }
        Ok(self.add_edge(&registration.from, &registration.to))
    }

    async fn remove_registration(&self, key: &str) -> Result<(), ArangoError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(write_refused());
        }
        if state.delete_before_remove {
            state.delete_before_remove = false;
            state.edges.retain(|e| e.key != key);
        }
        let before = state.edges.len();
        state.edges.retain(|e| e.key != key);
        if state.edges.len() == before {
            return Err(ArangoError::Server {
                code: 404,
                error_num: ERROR_DOCUMENT_NOT_FOUND,
                message: "document not found".to_string(),
            });
        }
        Ok(())
    }

    async fn reachable_titles(&self, student: &StudentId) -> Result<Vec<String>, ArangoError> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(read_refused());
        }
        let start = student.vertex_id();

        let mut visited = HashSet::from([start.clone()]);
        let mut queue = VecDeque::from([(start, 0u32)]);
        let mut titles = Vec::new();

        while let Some((vertex, depth)) = queue.pop_front() {
            if depth == 3 {
                continue;
            }
            for edge in state.edges.iter().filter(|e| e.from == vertex) {
                if visited.insert(edge.to.clone()) {
                    if let Some(title) = state.titles.get(&edge.to) {
                        titles.push(title.clone());
                    }
                    queue.push_back((edge.to.clone(), depth + 1));
                }
            }
        }

        Ok(titles)
    }
}
