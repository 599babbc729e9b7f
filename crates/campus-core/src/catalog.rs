//! Fixed reference data and seed records.
//!
//! The class catalog and student roster are shown in the enrollment menu
//! and double as the vertex seed set for the school graph.

use std::fmt;

use crate::types::{ClassCode, LectureVertex, Registration, StudentId, StudentRecord, StudentVertex};

/// An immutable, ordered mapping from short codes to display names.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable {
    entries: &'static [(&'static str, &'static str)],
}

impl ReferenceTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Look up the display name for a code.
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ReferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (code, name) in self.entries {
            writeln!(f, "  {code}: {name}")?;
        }
        Ok(())
    }
}

/// Classes offered, keyed by class code.
pub const CLASS_CATALOG: ReferenceTable = ReferenceTable::new(&[
    ("MAT101", "Calculus"),
    ("STA101", "Statistics"),
    ("CSC101", "Algorithms"),
]);

/// Enrolled students, keyed by student ID.
pub const STUDENT_ROSTER: ReferenceTable = ReferenceTable::new(&[
    ("01", "Anna Smith"),
    ("02", "Jake Clark"),
    ("03", "Lisa Jones"),
]);

/// Initial (student ID, class code) registrations in the school graph.
pub const SEED_REGISTRATIONS: &[(&str, &str)] = &[
    ("01", "MAT101"),
    ("01", "STA101"),
    ("01", "CSC101"),
    ("02", "MAT101"),
    ("02", "STA101"),
    ("03", "CSC101"),
];

/// Initial (name, age) records for the plain students collection.
pub const SEED_STUDENT_RECORDS: &[(&str, i64)] = &[("jane", 39), ("josh", 18), ("judy", 21)];

// ── Seed builders ─────────────────────────────────────────────────

pub fn seed_student_vertices() -> Vec<StudentVertex> {
    STUDENT_ROSTER
        .iter()
        .map(|(id, name)| StudentVertex {
            key: id.to_string(),
            full_name: name.to_string(),
        })
        .collect()
}

pub fn seed_lecture_vertices() -> Vec<LectureVertex> {
    CLASS_CATALOG
        .iter()
        .map(|(code, title)| LectureVertex {
            key: code.to_string(),
            title: title.to_string(),
        })
        .collect()
}

pub fn seed_registrations() -> Vec<Registration> {
    SEED_REGISTRATIONS
        .iter()
        .map(|(student, class)| Registration::new(&StudentId::new(*student), &ClassCode::new(*class)))
        .collect()
}

pub fn seed_student_records() -> Vec<StudentRecord> {
    SEED_STUDENT_RECORDS
        .iter()
        .map(|(name, age)| StudentRecord::new(*name, *age))
        .collect()
}
