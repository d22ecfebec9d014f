//! Dense-matrix Prim oracle for MST property verification.
//!
//! Deliberately shares nothing with the implementations under test: no
//! priority queue, no union-find, and no sort. Parallel edges collapse to
//! their lightest weight and self-loops are ignored.

/// Result of the oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components, isolated vertices included.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with an `O(V^2)` scan per component.
pub(super) fn dense_prim(vertex_count: usize, edges: &[(usize, usize, f64)]) -> OracleForest {
    let mut lightest = vec![vec![None::<f64>; vertex_count]; vertex_count];
    for &(a, b, weight) in edges {
        if a == b {
            continue;
        }
        for (x, y) in [(a, b), (b, a)] {
            let slot = &mut lightest[x][y];
            if slot.is_none_or(|current| weight < current) {
                *slot = Some(weight);
            }
        }
    }

    let mut in_tree = vec![false; vertex_count];
    let mut result = OracleForest {
        total_weight: 0.0,
        edge_count: 0,
        component_count: 0,
    };

    for root in 0..vertex_count {
        if in_tree[root] {
            continue;
        }
        result.component_count += 1;
        let mut distance = vec![None::<f64>; vertex_count];
        distance[root] = Some(0.0);

        while let Some((vertex, cost)) = (0..vertex_count)
            .filter(|&v| !in_tree[v])
            .filter_map(|v| distance[v].map(|d| (v, d)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
        {
            in_tree[vertex] = true;
            if vertex != root {
                result.total_weight += cost;
                result.edge_count += 1;
            }
            for next in 0..vertex_count {
                if in_tree[next] {
                    continue;
                }
                if let Some(weight) = lightest[vertex][next]
                    && distance[next].is_none_or(|current| weight < current)
                {
                    distance[next] = Some(weight);
                }
            }
        }
    }
    result
}
