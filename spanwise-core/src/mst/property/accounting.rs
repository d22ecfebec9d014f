//! Property 4: Counter accounting.
//!
//! Checks the relationships the operation counters must satisfy for each
//! algorithm, independent of the input's weights.

use proptest::test_runner::TestCaseResult;

use crate::mst::{KruskalMst, PrimMst};

use super::helpers::{ensure, run};
use super::types::MstFixture;

/// Runs the counter accounting property for the given fixture.
pub(super) fn run_counter_accounting_property(fixture: &MstFixture) -> TestCaseResult {
    let vertices = fixture.graph.vertex_count() as u64;
    let edges = fixture.graph.edge_count() as u64;

    let kruskal = run(fixture, "kruskal", KruskalMst::compute)?;
    let m = kruskal.metrics();
    let selected = kruskal.edges().len() as u64;
    ensure(m.finds() == 2 * m.edges_inspected(), fixture, || {
        format!("kruskal: {} finds for {} inspected edges", m.finds(), m.edges_inspected())
    })?;
    ensure(m.unions() == selected, fixture, || {
        format!("kruskal: {} unions for {selected} selected edges", m.unions())
    })?;
    ensure(
        (selected..=edges).contains(&m.edges_inspected()),
        fixture,
        || format!("kruskal: {} inspected of {edges} edges", m.edges_inspected()),
    )?;
    ensure(m.comparisons() >= edges.saturating_sub(1), fixture, || {
        format!("kruskal: only {} comparisons to sort {edges} edges", m.comparisons())
    })?;
    ensure(
        m.pq_inserts() + m.pq_del_mins() + m.pq_decrease_keys() == 0,
        fixture,
        || "kruskal touched a priority queue".to_owned(),
    )?;

    let prim = run(fixture, "prim", PrimMst::compute)?;
    let m = prim.metrics();
    let selected = prim.edges().len() as u64;
    ensure(m.pq_inserts() == vertices, fixture, || {
        format!("prim: {} inserts for {vertices} vertices", m.pq_inserts())
    })?;
    ensure(m.pq_del_mins() == m.pq_inserts(), fixture, || {
        format!("prim: {} del-mins for {} inserts", m.pq_del_mins(), m.pq_inserts())
    })?;
    ensure(m.pq_inserts() >= selected, fixture, || {
        format!("prim: {} inserts for {selected} selected edges", m.pq_inserts())
    })?;
    ensure(m.comparisons() == m.edges_inspected(), fixture, || {
        format!(
            "prim: {} comparisons for {} inspected edges",
            m.comparisons(),
            m.edges_inspected()
        )
    })?;
    ensure(
        (selected..=2 * edges).contains(&m.edges_inspected()),
        fixture,
        || format!("prim: {} inspected of {edges} edges", m.edges_inspected()),
    )?;
    ensure(m.pq_decrease_keys() <= m.edges_inspected(), fixture, || {
        format!("prim: {} decrease-keys", m.pq_decrease_keys())
    })?;
    ensure(m.finds() + m.unions() == 0, fixture, || {
        "prim touched a union-find".to_owned()
    })?;
    Ok(())
}
