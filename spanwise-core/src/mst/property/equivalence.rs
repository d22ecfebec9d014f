//! Property 1: Equivalence with the oracle.
//!
//! For any generated graph, Kruskal and Prim must match the dense-matrix
//! oracle in total weight (within the agreement tolerance), edge count, and
//! component count.

use proptest::test_runner::TestCaseResult;

use crate::compare::WEIGHT_AGREEMENT_TOLERANCE;

use super::helpers::{ensure, run, triples};
use super::oracle::dense_prim;
use super::types::{ALGORITHMS, MstFixture};

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let oracle = dense_prim(fixture.graph.vertex_count(), &triples(&fixture.graph));

    for (name, compute) in ALGORITHMS {
        let result = run(fixture, name, compute)?;
        let forest = result.forest();

        ensure(
            (forest.total_weight() - oracle.total_weight).abs() <= WEIGHT_AGREEMENT_TOLERANCE,
            fixture,
            || {
                format!(
                    "{name} weight {} differs from oracle weight {}",
                    forest.total_weight(),
                    oracle.total_weight,
                )
            },
        )?;
        ensure(forest.edge_count() == oracle.edge_count, fixture, || {
            format!(
                "{name} selected {} edges, oracle selected {}",
                forest.edge_count(),
                oracle.edge_count,
            )
        })?;
        ensure(forest.component_count() == oracle.component_count, fixture, || {
            format!(
                "{name} reports {} components, oracle found {}",
                forest.component_count(),
                oracle.component_count,
            )
        })?;
    }
    Ok(())
}
