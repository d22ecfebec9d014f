//! Prim's algorithm (eager variant) over an instrumented indexed min-PQ.

use tracing::{debug, instrument, trace};

use crate::{
    error::MstError,
    graph::{Edge, EdgeWeightedGraph},
    metrics::{Algorithm, Metrics, Operation, OperationObserver},
    priority_queue::{IndexedMinQueue, InstrumentedIndexMinPq},
};

use super::{MstRun, SpanningForest};

/// Prim's minimum spanning forest algorithm.
///
/// A pass is rooted at every vertex that earlier passes did not reach, in
/// increasing index order, so each connected component gets its own tree.
/// The forest is read from the best connecting edge of every vertex, in
/// vertex order.
///
/// # Examples
/// ```
/// use spanwise_core::{EdgeWeightedGraph, PrimMst};
///
/// let graph = EdgeWeightedGraph::from_edges(4, [(0, 1, 5.0), (2, 3, 7.0)])?;
/// let run = PrimMst::compute(&graph)?;
/// assert_eq!(run.forest().component_count(), 2);
/// assert_eq!(run.total_weight(), 12.0);
/// assert_eq!(run.metrics().pq_inserts(), run.metrics().pq_del_mins());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PrimMst;

impl PrimMst {
    /// Computes a minimum spanning forest of `graph`.
    ///
    /// # Errors
    /// Returns [`MstError`] if the graph's adjacency is inconsistent with its
    /// edge list or a priority-queue precondition is violated.
    #[instrument(
        name = "mst.prim",
        err,
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn compute(graph: &EdgeWeightedGraph) -> Result<MstRun, MstError> {
        let mut metrics = Metrics::new(Algorithm::Prim);
        metrics.start_timer();
        let forest = PrimState::new(graph, &metrics).run()?;
        metrics.stop_timer();
        metrics.publish();

        debug!(
            selected = forest.edge_count(),
            total_weight = forest.total_weight(),
            pq_inserts = metrics.pq_inserts(),
            elapsed_ms = metrics.elapsed_ms(),
            "prim run completed"
        );
        Ok(MstRun::new(forest, metrics))
    }
}

struct PrimState<'a> {
    graph: &'a EdgeWeightedGraph,
    metrics: &'a Metrics,
    edge_to: Vec<Option<Edge>>,
    dist_to: Vec<f64>,
    marked: Vec<bool>,
    queue: InstrumentedIndexMinPq<'a, f64>,
}

impl<'a> PrimState<'a> {
    fn new(graph: &'a EdgeWeightedGraph, metrics: &'a Metrics) -> Self {
        let vertex_count = graph.vertex_count();
        Self {
            graph,
            metrics,
            edge_to: vec![None; vertex_count],
            dist_to: vec![f64::INFINITY; vertex_count],
            marked: vec![false; vertex_count],
            queue: InstrumentedIndexMinPq::new(vertex_count, metrics),
        }
    }

    fn run(mut self) -> Result<SpanningForest, MstError> {
        for root in 0..self.graph.vertex_count() {
            if !self.marked[root] {
                trace!(root, "starting prim pass");
                self.grow(root)?;
            }
        }

        let edges: Vec<Edge> = self.edge_to.into_iter().flatten().collect();
        let total_weight = edges.iter().map(Edge::weight).sum();
        Ok(SpanningForest::new(self.graph.vertex_count(), edges, total_weight))
    }

    fn grow(&mut self, root: usize) -> Result<(), MstError> {
        self.dist_to[root] = 0.0;
        self.queue.insert(root, 0.0)?;
        while !self.queue.is_empty() {
            let vertex = self.queue.del_min()?;
            self.scan(vertex)?;
        }
        Ok(())
    }

    fn scan(&mut self, vertex: usize) -> Result<(), MstError> {
        self.marked[vertex] = true;
        let graph = self.graph;
        for edge in graph.adjacent(vertex)? {
            let neighbour = edge.other(vertex).ok_or(MstError::InvariantViolation {
                invariant: "adjacent edge must touch the scanned vertex",
                vertex,
            })?;
            if self.marked[neighbour] {
                continue;
            }
            self.metrics.record(Operation::EdgeInspected);
            self.metrics.record(Operation::Comparison);
            if edge.weight() < self.dist_to[neighbour] {
                self.relax(neighbour, *edge)?;
            }
        }
        Ok(())
    }

    fn relax(&mut self, vertex: usize, edge: Edge) -> Result<(), MstError> {
        let weight = edge.weight();
        self.dist_to[vertex] = weight;
        self.edge_to[vertex] = Some(edge);
        if self.queue.contains(vertex) {
            self.queue.decrease_key(vertex, weight)
        } else {
            self.queue.insert(vertex, weight)
        }
    }
}
