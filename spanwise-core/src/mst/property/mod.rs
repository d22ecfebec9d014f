//! Property-based tests for the Kruskal and Prim implementations.
//!
//! Both algorithms are checked against a dense-matrix Prim oracle, against
//! the structural invariants of a spanning forest, against the validator,
//! for run-to-run determinism, and for consistent operation counters across
//! graph topologies with varied weight distributions.

mod accounting;
mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
