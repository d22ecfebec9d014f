//! JSON result report.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use spanwise_core::{AlgorithmReport, GraphComparison, LabeledGraph};
use tracing::{Span, field, instrument};

use super::CliError;

/// Results for a whole batch, in input order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// One entry per input graph.
    pub results: Vec<GraphResult>,
}

/// Both algorithm outcomes for one graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphResult {
    /// Identifier from the input document.
    pub graph_id: i64,
    /// Size of the input graph.
    pub input_stats: InputStats,
    /// Prim's outcome.
    pub prim: AlgorithmOutput,
    /// Kruskal's outcome.
    pub kruskal: AlgorithmOutput,
}

/// Vertex and edge counts of an input graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStats {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of edges, including self-loops and parallel edges.
    pub edges: usize,
}

/// A single algorithm run as written to the report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmOutput {
    /// Selected edges in the order the algorithm produced them.
    pub mst_edges: Vec<EdgeOutput>,
    /// Sum of the selected edge weights.
    pub total_cost: f64,
    /// Weight comparisons performed.
    pub comparisons: u64,
    /// Union-find `find` calls.
    pub finds: u64,
    /// Union-find `union` calls.
    pub unions: u64,
    /// Priority-queue inserts.
    #[serde(rename = "pqInserts")]
    pub pq_inserts: u64,
    /// Priority-queue delete-min calls.
    #[serde(rename = "pqDelMins")]
    pub pq_del_mins: u64,
    /// Priority-queue decrease-key calls.
    #[serde(rename = "pqDecreaseKeys")]
    pub pq_decrease_keys: u64,
    /// Edges examined by the main loop.
    #[serde(rename = "edgesInspected")]
    pub edges_inspected: u64,
    /// Wall-clock duration of the run.
    pub execution_time_ms: f64,
    /// Whether the validator accepted the run's output.
    pub valid: bool,
}

/// A selected edge resolved to its endpoint labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeOutput {
    /// Label of the edge's first endpoint.
    pub from: String,
    /// Label of the edge's second endpoint.
    pub to: String,
    /// Edge weight.
    pub weight: f64,
}

impl RunReport {
    /// Pairs each comparison with the graph it was computed from.
    ///
    /// `graphs` and `comparisons` must be in the same order; extra entries on
    /// either side are ignored.
    #[must_use]
    pub fn build(graphs: &[LabeledGraph], comparisons: &[GraphComparison]) -> Self {
        let results = graphs
            .iter()
            .zip(comparisons)
            .map(|(graph, comparison)| GraphResult {
                graph_id: comparison.graph_id(),
                input_stats: InputStats {
                    vertices: comparison.vertex_count(),
                    edges: comparison.edge_count(),
                },
                prim: AlgorithmOutput::from_report(graph, comparison.prim()),
                kruskal: AlgorithmOutput::from_report(graph, comparison.kruskal()),
            })
            .collect();
        Self { results }
    }
}

impl AlgorithmOutput {
    fn from_report(graph: &LabeledGraph, report: &AlgorithmReport) -> Self {
        let run = report.run();
        let metrics = run.metrics().snapshot();
        let label = |vertex: usize| {
            graph
                .label(vertex)
                .map_or_else(|| vertex.to_string(), ToOwned::to_owned)
        };
        let mst_edges = run
            .edges()
            .iter()
            .map(|edge| {
                let (from, to) = edge.endpoints();
                EdgeOutput {
                    from: label(from),
                    to: label(to),
                    weight: edge.weight(),
                }
            })
            .collect();
        Self {
            mst_edges,
            total_cost: run.total_weight(),
            comparisons: metrics.comparisons,
            finds: metrics.finds,
            unions: metrics.unions,
            pq_inserts: metrics.pq_inserts,
            pq_del_mins: metrics.pq_del_mins,
            pq_decrease_keys: metrics.pq_decrease_keys,
            edges_inspected: metrics.edges_inspected,
            execution_time_ms: metrics.elapsed_ms,
            valid: report.is_valid(),
        }
    }
}

/// Writes `report` to `path` as pretty-printed JSON, creating missing parent
/// directories.
///
/// # Errors
/// Returns [`CliError::Io`] when a directory or the file cannot be created
/// or flushed, and [`CliError::Json`] when serialisation fails.
#[instrument(name = "cli.write_report", err, skip(report), fields(path = field::Empty))]
pub fn write_report(path: &Path, report: &RunReport) -> Result<(), CliError> {
    Span::current().record("path", field::display(path.display()));
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error)
}
