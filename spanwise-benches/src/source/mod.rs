//! Seeded synthetic graphs for benchmarking.
//!
//! Each component starts as a random spanning tree, so the component count
//! of a generated graph is exactly the configured one. Extra edges are then
//! added between distinct vertices of the same component.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use spanwise_core::{EdgeWeightedGraph, GraphError, LabeledGraph};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested component count was zero.
    #[error("component count must be greater than zero")]
    ZeroComponents,
    /// More components were requested than there are vertices.
    #[error("component count ({component_count}) must not exceed vertex count ({vertex_count})")]
    ComponentsExceedVertices {
        /// Number of components requested.
        component_count: usize,
        /// Number of vertices requested.
        vertex_count: usize,
    },
    /// A floating-point generator parameter was invalid.
    #[error("invalid floating-point parameter `{parameter}`")]
    InvalidFloatParameter {
        /// Name of the invalid parameter.
        parameter: &'static str,
    },
    /// The graph model rejected a generated edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of connected components; `1` yields a connected graph.
    pub component_count: usize,
    /// Edges added on top of the spanning forest.
    pub extra_edges: usize,
    /// Weights are drawn uniformly from `[0, max_weight)`.
    pub max_weight: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a graph from `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
///
/// # Examples
/// ```
/// use spanwise_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let graph = generate_graph(&SyntheticGraphConfig {
///     vertex_count: 10,
///     component_count: 1,
///     extra_edges: 5,
///     max_weight: 100.0,
///     seed: 42,
/// })?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 14);
/// # Ok::<(), spanwise_benches::source::SyntheticError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<EdgeWeightedGraph, SyntheticError> {
    validate(config)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = EdgeWeightedGraph::new(config.vertex_count);

    // Vertices are dealt round-robin; each joins its component through a
    // random earlier member.
    let mut components: Vec<Vec<usize>> = vec![Vec::new(); config.component_count];
    for (vertex, slot) in (0..config.vertex_count).zip((0..config.component_count).cycle()) {
        let Some(members) = components.get_mut(slot) else {
            continue;
        };
        if let Some(&parent) = members.choose(&mut rng) {
            graph.add_edge(parent, vertex, rng.gen_range(0.0..config.max_weight))?;
        }
        members.push(vertex);
    }

    let eligible: Vec<&[usize]> = components
        .iter()
        .filter(|members| members.len() >= 2)
        .map(Vec::as_slice)
        .collect();
    for _ in 0..config.extra_edges {
        let Some(members) = eligible.choose(&mut rng) else {
            break;
        };
        let mut pair = members.choose_multiple(&mut rng, 2).copied();
        if let (Some(either), Some(other)) = (pair.next(), pair.next()) {
            graph.add_edge(either, other, rng.gen_range(0.0..config.max_weight))?;
        }
    }
    Ok(graph)
}

/// Wraps `graph` with generated `v<index>` labels.
///
/// # Errors
/// Never fails in practice; the error is the one [`LabeledGraph::new`]
/// reports for a label count mismatch.
pub fn label_graph(id: i64, graph: EdgeWeightedGraph) -> Result<LabeledGraph, GraphError> {
    let labels = (0..graph.vertex_count()).map(|vertex| format!("v{vertex}")).collect();
    LabeledGraph::new(id, "synthetic", graph, labels)
}

fn validate(config: &SyntheticGraphConfig) -> Result<(), SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if config.component_count == 0 {
        return Err(SyntheticError::ZeroComponents);
    }
    if config.component_count > config.vertex_count {
        return Err(SyntheticError::ComponentsExceedVertices {
            component_count: config.component_count,
            vertex_count: config.vertex_count,
        });
    }
    if !config.max_weight.is_finite() || config.max_weight <= 0.0 {
        return Err(SyntheticError::InvalidFloatParameter {
            parameter: "max_weight",
        });
    }
    Ok(())
}
