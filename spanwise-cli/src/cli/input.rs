//! JSON batch loading.
//!
//! Reads `{"graphs": [...]}` documents into [`LabeledGraph`] values, resolving
//! edge endpoints by node label.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use spanwise_core::{EdgeWeightedGraph, LabeledGraph};
use tracing::{Span, debug, field, instrument};

use super::CliError;

#[derive(Debug, Deserialize)]
struct BatchDocument {
    graphs: Vec<GraphDocument>,
}

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    description: String,
    nodes: Vec<String>,
    edges: Vec<EdgeDocument>,
}

#[derive(Debug, Deserialize)]
struct EdgeDocument {
    from: String,
    to: String,
    weight: f64,
}

/// Loads every graph from the JSON batch file at `path`.
///
/// # Errors
/// Returns [`CliError::Io`] if the file cannot be opened, [`CliError::Json`]
/// if it is not a valid batch document, and the label or graph errors raised
/// by [`parse_graphs`].
#[instrument(name = "cli.load_graphs", err, fields(path = field::Empty, graphs = field::Empty))]
pub fn load_graphs(path: &Path) -> Result<Vec<LabeledGraph>, CliError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graphs = parse_graphs(BufReader::new(file)).map_err(|err| match err {
        CliError::Json { source, .. } => CliError::Json {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    span.record("graphs", graphs.len());
    Ok(graphs)
}

/// Parses a JSON batch document from `reader`.
///
/// JSON failures carry an empty path; [`load_graphs`] fills it in.
///
/// # Errors
/// Returns [`CliError::Json`] for malformed documents,
/// [`CliError::DuplicateLabel`] when a graph repeats a node label,
/// [`CliError::UnknownLabel`] when an edge names a missing node, and
/// [`CliError::Graph`] when an edge is rejected by the graph model.
///
/// # Examples
/// ```
/// use spanwise_cli::cli::parse_graphs;
///
/// let json = r#"{"graphs":[{"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":2.5}]}]}"#;
/// let graphs = parse_graphs(json.as_bytes())?;
/// assert_eq!(graphs[0].id(), 0);
/// assert_eq!(graphs[0].graph().edge_count(), 1);
/// # Ok::<(), spanwise_cli::cli::CliError>(())
/// ```
pub fn parse_graphs(reader: impl Read) -> Result<Vec<LabeledGraph>, CliError> {
    let document: BatchDocument =
        serde_json::from_reader(reader).map_err(|source| CliError::Json {
            path: Default::default(),
            source,
        })?;
    document.graphs.into_iter().map(build_graph).collect()
}

fn build_graph(document: GraphDocument) -> Result<LabeledGraph, CliError> {
    let GraphDocument {
        id,
        description,
        nodes,
        edges,
    } = document;

    let mut index = HashMap::with_capacity(nodes.len());
    for (position, label) in nodes.iter().enumerate() {
        if index.insert(label.as_str(), position).is_some() {
            return Err(CliError::DuplicateLabel {
                graph_id: id,
                label: label.clone(),
            });
        }
    }

    let resolve = |label: &str| {
        index
            .get(label)
            .copied()
            .ok_or_else(|| CliError::UnknownLabel {
                graph_id: id,
                label: label.to_owned(),
            })
    };

    let mut graph = EdgeWeightedGraph::new(nodes.len());
    for edge in &edges {
        let from = resolve(&edge.from)?;
        let to = resolve(&edge.to)?;
        graph
            .add_edge(from, to, edge.weight)
            .map_err(|source| CliError::Graph {
                graph_id: id,
                source,
            })?;
    }
    debug!(
        graph_id = id,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    LabeledGraph::new(id, description, graph, nodes).map_err(|source| CliError::Graph {
        graph_id: id,
        source,
    })
}
