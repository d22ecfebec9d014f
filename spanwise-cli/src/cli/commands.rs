//! Command implementations and argument parsing for the spanwise CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use spanwise_core::{GraphError, MstError, WEIGHT_AGREEMENT_TOLERANCE, compare_batch};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::load_graphs;
use super::report::{AlgorithmOutput, RunReport, write_report};

/// Input file read when none is given.
pub const DEFAULT_INPUT: &str = "data/graphs.json";
/// Report file written when `--output` is absent.
pub const DEFAULT_OUTPUT: &str = "results/output.json";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Compare Kruskal and Prim minimum spanning trees over a batch of graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run both algorithms on every graph, validate them, and write a report.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// JSON batch file holding the input graphs.
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the JSON report.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the summary without writing the report.
    #[arg(long = "no-write")]
    pub no_write: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading input or writing the report.
    #[error("I/O failure on `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A document could not be parsed or serialised.
    #[error("invalid JSON in `{path}`: {source}")]
    Json {
        /// Path of the offending document.
        path: PathBuf,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// An edge referenced a node label the graph does not declare.
    #[error("graph {graph_id}: edge references unknown node `{label}`")]
    UnknownLabel {
        /// Identifier of the graph being loaded.
        graph_id: i64,
        /// The unresolved label.
        label: String,
    },
    /// A node label was declared twice in one graph.
    #[error("graph {graph_id}: node `{label}` is declared more than once")]
    DuplicateLabel {
        /// Identifier of the graph being loaded.
        graph_id: i64,
        /// The repeated label.
        label: String,
    },
    /// The graph model rejected an input graph.
    #[error("graph {graph_id}: {source}")]
    Graph {
        /// Identifier of the graph being loaded.
        graph_id: i64,
        /// Underlying graph error.
        #[source]
        source: GraphError,
    },
    /// An algorithm run aborted.
    #[error(transparent)]
    Mst(#[from] MstError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Per-graph results in input order.
    pub report: RunReport,
    /// Report location, or `None` when writing was skipped.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, computation, or report writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("graphs.json");
/// std::fs::write(
///     &input,
///     r#"{"graphs":[{"id":1,"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":3}]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input,
///         output: dir.path().join("out.json"),
///         no_write: true,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.results[0].kruskal.total_cost, 3.0);
/// assert!(summary.output.is_none());
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<RunSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(input = field::Empty, output = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let RunCommand {
        input,
        output,
        no_write,
    } = command;
    let span = Span::current();
    span.record("input", field::display(input.display()));

    let graphs = load_graphs(&input)?;
    let comparisons = compare_batch(&graphs)?;
    let report = RunReport::build(&graphs, &comparisons);

    let written = if no_write {
        None
    } else {
        span.record("output", field::display(output.display()));
        write_report(&output, &report)?;
        Some(output)
    };

    info!(
        graphs = report.results.len(),
        disagreements = comparisons.iter().filter(|c| !c.weights_agree()).count(),
        written = written.is_some(),
        "command completed"
    );
    Ok(RunSummary {
        report,
        output: written,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use spanwise_cli::cli::{RunReport, RunSummary, render_summary};
/// let summary = RunSummary {
///     report: RunReport { results: Vec::new() },
///     output: None,
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8_lossy(buffer.get_ref()), "graphs: 0\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &RunSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graphs: {}", summary.report.results.len())?;
    for result in &summary.report.results {
        writeln!(
            writer,
            "graph {}\tV={}\tE={}\tkruskal={} ({})\tprim={} ({})",
            result.graph_id,
            result.input_stats.vertices,
            result.input_stats.edges,
            result.kruskal.total_cost,
            validity(&result.kruskal),
            result.prim.total_cost,
            validity(&result.prim),
        )?;
        if (result.kruskal.total_cost - result.prim.total_cost).abs() > WEIGHT_AGREEMENT_TOLERANCE {
            writeln!(writer, "  warning: total weights disagree")?;
        }
    }
    if let Some(path) = &summary.output {
        writeln!(writer, "report: {}", path.display())?;
    }
    Ok(())
}

const fn validity(output: &AlgorithmOutput) -> &'static str {
    if output.valid { "valid" } else { "INVALID" }
}
