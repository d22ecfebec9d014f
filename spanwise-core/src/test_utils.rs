//! Shared test utilities for `spanwise-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::graph::{Edge, EdgeWeightedGraph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SPANWISE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `(either, other, weight)` triples, panicking on
/// invalid input.
pub(crate) fn graph(vertex_count: usize, edges: &[(usize, usize, f64)]) -> EdgeWeightedGraph {
    EdgeWeightedGraph::from_edges(vertex_count, edges.iter().copied())
        .expect("test graph must be valid")
}

/// The 4-cycle `0-1 (1), 1-2 (2), 2-3 (3), 3-0 (4)` whose MST weighs 6.
pub(crate) fn square() -> EdgeWeightedGraph {
    graph(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)])
}

/// Returns the endpoints of `edges` normalised to `(min, max)` and sorted.
pub(crate) fn endpoint_set(edges: &[Edge]) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = edges
        .iter()
        .map(|edge| {
            let (a, b) = edge.endpoints();
            (a.min(b), a.max(b))
        })
        .collect();
    pairs.sort_unstable();
    pairs
}
