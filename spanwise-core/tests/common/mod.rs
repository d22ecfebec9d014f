use spanwise_core::{EdgeWeightedGraph, LabeledGraph};

/// Builds a labelled graph whose vertices are named `A`, `B`, `C`, ...
#[must_use]
pub fn lettered(id: i64, vertex_count: usize, edges: &[(usize, usize, f64)]) -> LabeledGraph {
    let graph = EdgeWeightedGraph::from_edges(vertex_count, edges.iter().copied())
        .expect("fixture edges must be valid");
    let labels = (b'A'..)
        .take(vertex_count)
        .map(|letter| char::from(letter).to_string())
        .collect();
    LabeledGraph::new(id, format!("fixture {id}"), graph, labels).expect("labels must match")
}

/// The square `A-B (1), B-C (2), C-D (3), D-A (4)`.
#[must_use]
pub fn square() -> LabeledGraph {
    lettered(1, 4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)])
}
