//! campus-enroll: Class enrollment over an ArangoDB school graph.
//!
//! Students and lectures are vertices; a registration is an edge from a
//! student to a lecture. At most one registration per pair is kept by
//! checking for an existing edge before inserting.

pub mod menu;
pub mod registration;
pub mod seed;

#[cfg(test)]
mod memory;
