//! Shared helper functions for MST property-based tests.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{graph::EdgeWeightedGraph, mst::MstRun};

use super::types::{Compute, MstFixture};

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts the connected components of `graph`, isolated vertices included.
pub(super) fn count_components(graph: &EdgeWeightedGraph) -> usize {
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    let mut components = graph.vertex_count();
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        let ra = find_root(&mut parent, a);
        let rb = find_root(&mut parent, b);
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
        }
    }
    components
}

/// Returns the graph's edges as `(either, other, weight)` triples.
pub(super) fn triples(graph: &EdgeWeightedGraph) -> Vec<(usize, usize, f64)> {
    graph
        .edges()
        .iter()
        .map(|edge| {
            let (a, b) = edge.endpoints();
            (a, b, edge.weight())
        })
        .collect()
}

/// Runs `compute` on the fixture, turning an error into a test failure.
pub(super) fn run(fixture: &MstFixture, name: &str, compute: Compute) -> Result<MstRun, TestCaseError> {
    compute(&fixture.graph)
        .map_err(|e| TestCaseError::fail(format!("{name} failed: {e} ({})", fixture.context())))
}

/// Fails with `message` and the fixture context unless `condition` holds.
pub(super) fn ensure(condition: bool, fixture: &MstFixture, message: impl FnOnce() -> String) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!("{} ({})", message(), fixture.context())))
    }
}
