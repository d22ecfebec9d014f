//! Command-line interface orchestration for spanwise.
//!
//! The `run` command loads a JSON batch of graphs, runs Kruskal and Prim on
//! each one, validates both results, and writes a JSON report.

mod commands;
mod input;
mod report;

pub use commands::{
    Cli, CliError, Command, DEFAULT_INPUT, DEFAULT_OUTPUT, RunCommand, RunSummary,
    render_summary, run_cli,
};
pub use input::{load_graphs, parse_graphs};
pub use report::{AlgorithmOutput, EdgeOutput, GraphResult, InputStats, RunReport, write_report};
