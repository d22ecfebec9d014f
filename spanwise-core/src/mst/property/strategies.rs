//! Strategy builders for MST property-based tests.
//!
//! Each generator draws a list of `(either, other, weight)` triples from a
//! seeded [`SmallRng`] and builds an [`EdgeWeightedGraph`] from them, so a
//! failing case can be replayed from its distribution and seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::EdgeWeightedGraph;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_NODES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_NODES: usize = 64;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_NODES: usize = 32;

type Triple = (usize, usize, f64);

/// Generates MST fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => probabilistic(rng, MAX_NODES, (0.2, 0.6), continuous),
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            probabilistic(rng, MAX_NODES, (0.3, 0.7), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => probabilistic(rng, DENSE_MAX_NODES, (0.7, 0.95), continuous),
        WeightDistribution::Disconnected => disconnected(rng),
        WeightDistribution::Negative => probabilistic(rng, MAX_NODES, (0.2, 0.6), |r| {
            // Whole and half units keep exact ties alongside negative values.
            f64::from(r.gen_range(-40_i32..=40)) / 2.0
        }),
    };

    let graph = EdgeWeightedGraph::from_edges(vertex_count, edges)
        .expect("generated edges must reference valid vertices with finite weights");
    MstFixture {
        graph,
        distribution,
    }
}

fn continuous(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

/// Adds each vertex pair with a probability sampled from `edge_prob_range`.
fn probabilistic(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> (usize, Vec<Triple>) {
    let vertex_count = rng.gen_range(MIN_NODES..=max_nodes);
    let probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(probability) {
                edges.push((i, j, weight(rng)));
            }
        }
    }
    if edges.is_empty() {
        edges.push((0, 1, weight(rng)));
    }
    (vertex_count, edges)
}

/// Builds a random spanning path, then adds roughly `n / 2` to `n` extra
/// edges between random pairs. Repeated pairs and self-loops are kept.
fn sparse(rng: &mut SmallRng) -> (usize, Vec<Triple>) {
    let vertex_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<Triple> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], continuous(rng)))
        .collect();
    for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
        let either = rng.gen_range(0..vertex_count);
        let other = rng.gen_range(0..vertex_count);
        edges.push((either, other, continuous(rng)));
    }
    (vertex_count, edges)
}

/// Builds two to five components of 1-12 vertices with no edges between
/// them.
fn disconnected(rng: &mut SmallRng) -> (usize, Vec<Triple>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        let probability: f64 = rng.gen_range(0.3..=0.8);
        let start = edges.len();
        for i in offset..offset + size {
            for j in (i + 1)..offset + size {
                if rng.gen_bool(probability) {
                    edges.push((i, j, continuous(rng)));
                }
            }
        }
        if size >= 2 && edges.len() == start {
            edges.push((offset, offset + 1, continuous(rng)));
        }
        offset += size;
    }
    (offset, edges)
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Manual `Arbitrary` so the tie-heavy distributions are sampled more often.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            3 => Just(Self::Negative),
        ]
    }
}
