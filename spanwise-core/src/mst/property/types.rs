//! Type definitions for MST property-based tests.
//!
//! Provides the fixture, configuration, and weight distribution types used
//! by the graph generation strategies and property functions.

use spanwise_test_support::ci::property_test_profile::determinism_repeats;

use crate::{
    error::MstError,
    graph::EdgeWeightedGraph,
    mst::{KruskalMst, MstRun, PrimMst},
};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph built from a random spanning tree plus extra edges,
    /// self-loops and parallel edges included.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
    /// Weights drawn from a range straddling zero.
    Negative,
}

/// Fixture for MST property tests.
///
/// Captures the generated graph and the weight distribution used to build
/// it, providing context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Generated input graph.
    pub graph: EdgeWeightedGraph,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Formats the fixture context appended to every failure message.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.graph.vertex_count(),
            self.graph.edge_count(),
        )
    }
}

/// Entry point shared by both algorithms.
pub(super) type Compute = fn(&EdgeWeightedGraph) -> Result<MstRun, MstError>;

/// Both algorithms under test, labelled for failure messages.
pub(super) const ALGORITHMS: [(&str, Compute); 2] = [
    ("kruskal", KruskalMst::compute),
    ("prim", PrimMst::compute),
];

/// Configuration for the determinism property.
pub(super) struct RepeatConfig {
    /// Number of runs per input, the baseline included.
    pub repetitions: usize,
}

impl RepeatConfig {
    /// Loads the repetition count from the shared CI profile (default: 3).
    pub(super) fn load() -> Self {
        Self {
            repetitions: determinism_repeats(3),
        }
    }
}
