//! Support library for the spanwise CLI binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive the CLI
//! without forking a subprocess.

pub mod cli;
pub mod logging;
