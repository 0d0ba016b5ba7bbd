//! Skarv demo suite.
//!
//! Model builders and binaries showing the fermion-to-qubit encodings on
//! small lattice problems.

pub mod problems;
