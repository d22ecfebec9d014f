//! Property 2: Structural invariant verification.
//!
//! For any forest produced by Kruskal or Prim, verifies:
//!
//! - every selected edge is an edge of the input graph and not a self-loop;
//! - the forest is acyclic;
//! - it has `V - C` edges for `C` connected components of the input;
//! - the reported total matches the sum of the selected weights;
//! - the validator accepts it.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    graph::Edge,
    validator::{MstValidator, VALIDATION_TOLERANCE},
};

use super::helpers::{count_components, ensure, find_root, run};
use super::types::{ALGORITHMS, MstFixture};

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let components = count_components(&fixture.graph);
    let vertex_count = fixture.graph.vertex_count();

    for (name, compute) in ALGORITHMS {
        let result = run(fixture, name, compute)?;
        let edges = result.edges();

        validate_membership(fixture, name, edges)?;
        validate_acyclicity(fixture, name, edges)?;
        ensure(edges.len() == vertex_count - components, fixture, || {
            format!(
                "{name} selected {} edges, expected V - C = {}",
                edges.len(),
                vertex_count - components,
            )
        })?;

        let summed: f64 = edges.iter().map(Edge::weight).sum();
        ensure(
            (summed - result.total_weight()).abs() <= VALIDATION_TOLERANCE,
            fixture,
            || format!("{name} reports {} but its edges sum to {summed}", result.total_weight()),
        )?;

        let verdict = MstValidator::validate(&fixture.graph, edges, result.total_weight())
            .map_err(|e| TestCaseError::fail(format!("{name} validation errored: {e}")))?;
        ensure(verdict.is_valid(), fixture, || {
            format!("validator rejected {name}: {verdict:?}")
        })?;
    }
    Ok(())
}

fn validate_membership(fixture: &MstFixture, name: &str, edges: &[Edge]) -> TestCaseResult {
    for edge in edges {
        ensure(!edge.is_self_loop(), fixture, || format!("{name} selected self-loop {edge}"))?;
        ensure(fixture.graph.edge(edge.id()) == Some(edge), fixture, || {
            format!("{name} selected {edge}, which is not the graph's edge {:?}", edge.id())
        })?;
    }
    Ok(())
}

fn validate_acyclicity(fixture: &MstFixture, name: &str, edges: &[Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.graph.vertex_count()).collect();
    for edge in edges {
        let (a, b) = edge.endpoints();
        let ra = find_root(&mut parent, a);
        let rb = find_root(&mut parent, b);
        ensure(ra != rb, fixture, || format!("{name} edge {edge} creates a cycle"))?;
        parent[rb] = ra;
    }
    Ok(())
}
