//! Runs both MST algorithms on a graph and cross-checks their results.

use tracing::{info, instrument, warn};

use crate::{
    error::MstError,
    graph::LabeledGraph,
    mst::{KruskalMst, MstRun, PrimMst},
    validator::{MstValidator, Verdict},
};

/// Largest absolute difference between the Kruskal and Prim totals that
/// still counts as agreement.
pub const WEIGHT_AGREEMENT_TOLERANCE: f64 = 1e-9;

/// One algorithm's run together with the validator's verdict on it.
#[derive(Clone, Debug)]
pub struct AlgorithmReport {
    run: MstRun,
    verdict: Verdict,
}

impl AlgorithmReport {
    /// Returns the algorithm run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn run(&self) -> &MstRun { &self.run }

    /// Returns the validator's verdict.
    #[must_use]
    #[rustfmt::skip]
    pub const fn verdict(&self) -> &Verdict { &self.verdict }

    /// Returns `true` when the validator accepted the run.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }
}

/// Kruskal and Prim results for a single graph.
#[derive(Clone, Debug)]
pub struct GraphComparison {
    graph_id: i64,
    vertex_count: usize,
    edge_count: usize,
    kruskal: AlgorithmReport,
    prim: AlgorithmReport,
}

impl GraphComparison {
    /// Returns the identifier of the compared graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph_id(&self) -> i64 { self.graph_id }

    /// Returns the compared graph's vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the compared graph's edge count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns Kruskal's report.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kruskal(&self) -> &AlgorithmReport { &self.kruskal }

    /// Returns Prim's report.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prim(&self) -> &AlgorithmReport { &self.prim }

    /// Returns the absolute difference between the two total weights.
    #[must_use]
    pub fn weight_difference(&self) -> f64 {
        (self.kruskal.run.total_weight() - self.prim.run.total_weight()).abs()
    }

    /// Returns `true` when the totals agree within
    /// [`WEIGHT_AGREEMENT_TOLERANCE`].
    #[must_use]
    pub fn weights_agree(&self) -> bool {
        self.weight_difference() <= WEIGHT_AGREEMENT_TOLERANCE
    }
}

/// Runs Kruskal then Prim on `graph` and validates both results.
///
/// Disagreeing totals and rejected results are logged at `warn` and left for
/// the caller to inspect; neither is an error.
///
/// # Errors
/// Returns [`MstError`] when an algorithm or the validator hits a structural
/// error.
///
/// # Examples
/// ```
/// use spanwise_core::{EdgeWeightedGraph, LabeledGraph, compare_algorithms};
///
/// let graph = EdgeWeightedGraph::from_edges(2, [(0, 1, 3.5)])?;
/// let labeled = LabeledGraph::new(1, "pair", graph, vec!["A".into(), "B".into()])?;
/// let comparison = compare_algorithms(&labeled)?;
/// assert!(comparison.weights_agree());
/// assert!(comparison.kruskal().is_valid() && comparison.prim().is_valid());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.compare",
    err,
    skip(graph),
    fields(graph_id = graph.id(), vertices = graph.graph().vertex_count()),
)]
pub fn compare_algorithms(graph: &LabeledGraph) -> Result<GraphComparison, MstError> {
    let edges = graph.graph();
    let kruskal = report(graph, KruskalMst::compute(edges)?)?;
    let prim = report(graph, PrimMst::compute(edges)?)?;

    let comparison = GraphComparison {
        graph_id: graph.id(),
        vertex_count: edges.vertex_count(),
        edge_count: edges.edge_count(),
        kruskal,
        prim,
    };

    if !comparison.weights_agree() {
        warn!(
            kruskal = comparison.kruskal.run.total_weight(),
            prim = comparison.prim.run.total_weight(),
            difference = comparison.weight_difference(),
            "algorithms disagree on total weight"
        );
    }
    info!(
        kruskal_weight = comparison.kruskal.run.total_weight(),
        prim_weight = comparison.prim.run.total_weight(),
        kruskal_valid = comparison.kruskal.is_valid(),
        prim_valid = comparison.prim.is_valid(),
        "graph compared"
    );
    Ok(comparison)
}

fn report(graph: &LabeledGraph, run: MstRun) -> Result<AlgorithmReport, MstError> {
    let verdict = MstValidator::validate(graph.graph(), run.edges(), run.total_weight())?;
    Ok(AlgorithmReport { run, verdict })
}

/// Compares every graph in order, stopping at the first structural error.
///
/// # Errors
/// Returns the first [`MstError`] raised by [`compare_algorithms`].
pub fn compare_batch(graphs: &[LabeledGraph]) -> Result<Vec<GraphComparison>, MstError> {
    graphs.iter().map(compare_algorithms).collect()
}
