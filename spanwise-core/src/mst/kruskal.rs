//! Kruskal's algorithm with instrumented sorting and union-find.

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::{
    error::MstError,
    graph::{Edge, EdgeWeightedGraph},
    metrics::{Algorithm, Metrics, Operation, OperationObserver},
    union_find::{InstrumentedUnionFind, UnionFind},
};

use super::{MstRun, SpanningForest, sort::sort_by_counting};

/// Kruskal's minimum spanning forest algorithm.
///
/// Edges are stable-sorted by weight (ties keep their input order) and
/// accepted greedily whenever their endpoints lie in different components.
/// Every sort comparison, `find`, `union`, and inspected edge is counted.
///
/// # Examples
/// ```
/// use spanwise_core::{EdgeWeightedGraph, KruskalMst};
///
/// let graph = EdgeWeightedGraph::from_edges(
///     4,
///     [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)],
/// )?;
/// let run = KruskalMst::compute(&graph)?;
/// assert_eq!(run.edges().len(), 3);
/// assert_eq!(run.total_weight(), 6.0);
/// assert_eq!(run.metrics().unions(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct KruskalMst;

impl KruskalMst {
    /// Computes a minimum spanning forest of `graph`.
    ///
    /// # Errors
    /// Returns [`MstError`] when a primitive rejects an index, which only
    /// happens if the graph's edges reference vertices outside its range.
    #[instrument(
        name = "mst.kruskal",
        err,
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn compute(graph: &EdgeWeightedGraph) -> Result<MstRun, MstError> {
        let mut metrics = Metrics::new(Algorithm::Kruskal);
        metrics.start_timer();
        let forest = build_forest(graph, &metrics)?;
        metrics.stop_timer();
        metrics.publish();

        debug!(
            selected = forest.edge_count(),
            total_weight = forest.total_weight(),
            comparisons = metrics.comparisons(),
            elapsed_ms = metrics.elapsed_ms(),
            "kruskal run completed"
        );
        Ok(MstRun::new(forest, metrics))
    }
}

/// Orders edges by weight, then by position in the source graph.
fn compare_by_weight(left: &Edge, right: &Edge) -> Ordering {
    left.weight()
        .total_cmp(&right.weight())
        .then_with(|| left.id().cmp(&right.id()))
}

fn build_forest(graph: &EdgeWeightedGraph, metrics: &Metrics) -> Result<SpanningForest, MstError> {
    let mut edges = graph.edges().to_vec();
    sort_by_counting(&mut edges, metrics, compare_by_weight);

    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);
    let mut sets = InstrumentedUnionFind::new(vertex_count, metrics);
    let mut accepted = Vec::with_capacity(target);
    let mut total_weight = 0.0;

    for edge in &edges {
        if accepted.len() >= target {
            break;
        }
        metrics.record(Operation::EdgeInspected);

        let (either, other) = edge.endpoints();
        if sets.find(either)? != sets.find(other)? {
            sets.union(either, other)?;
            accepted.push(*edge);
            total_weight += edge.weight();
        }
    }

    Ok(SpanningForest::new(vertex_count, accepted, total_weight))
}
