//! campus-roster: A plain student roster in ArangoDB.
//!
//! Students are documents with a name and an age. Name uniqueness is
//! enforced by a unique persistent index created at seed time.

pub mod menu;
pub mod seed;
pub mod students;

#[cfg(test)]
mod memory;
