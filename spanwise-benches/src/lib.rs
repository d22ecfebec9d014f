//! Benchmark support crate for spanwise.
//!
//! Provides the seeded synthetic graph generator and parameter types used by
//! the Criterion benchmarks comparing Kruskal, Prim, and the validator.

pub mod error;
pub mod params;
pub mod source;
