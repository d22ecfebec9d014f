//! Property 3: Determinism.
//!
//! Runs each algorithm on the same graph several times and asserts that the
//! selected edges, total weight, and every operation counter are identical
//! across runs.

use proptest::test_runner::TestCaseResult;

use crate::metrics::Operation;

use super::helpers::{ensure, run};
use super::types::{ALGORITHMS, MstFixture, RepeatConfig};

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let config = RepeatConfig::load();

    for (name, compute) in ALGORITHMS {
        let baseline = run(fixture, name, compute)?;
        for attempt in 1..config.repetitions {
            let repeat = run(fixture, name, compute)?;
            ensure(repeat.edges() == baseline.edges(), fixture, || {
                format!("{name} run {attempt} selected different edges")
            })?;
            ensure(
                repeat.total_weight().to_bits() == baseline.total_weight().to_bits(),
                fixture,
                || {
                    format!(
                        "{name} run {attempt} weighs {} instead of {}",
                        repeat.total_weight(),
                        baseline.total_weight(),
                    )
                },
            )?;
            for operation in Operation::ALL {
                let (first, again) = (
                    baseline.metrics().count(operation),
                    repeat.metrics().count(operation),
                );
                ensure(first == again, fixture, || {
                    format!("{name} run {attempt} counted {again} {operation:?}, baseline {first}")
                })?;
            }
        }
    }
    Ok(())
}
