//! Undirected edge-weighted graphs consumed by the MST algorithms.
//!
//! Graphs are built once and then treated as read-only by every algorithm and
//! by the validator. Each edge remembers its position in the owning graph's
//! edge list so results can be traced back to the input.

use std::fmt;

use crate::error::GraphError;

/// Position of an edge within its owning graph's edge list.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Wraps a raw edge position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw edge position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// A weighted undirected edge.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, EdgeId};
///
/// let edge = Edge::new(2, 5, 1.5, EdgeId::new(0));
/// assert_eq!(edge.other(2), Some(5));
/// assert_eq!(edge.other(5), Some(2));
/// assert_eq!(edge.other(3), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    either: usize,
    other: usize,
    weight: f64,
    id: EdgeId,
}

impl Edge {
    /// Creates an edge between `either` and `other`.
    #[must_use]
    pub const fn new(either: usize, other: usize, weight: f64, id: EdgeId) -> Self {
        Self {
            either,
            other,
            weight,
            id,
        }
    }

    /// Returns one endpoint of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn either(&self) -> usize { self.either }

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// an endpoint.
    #[must_use]
    pub const fn other(&self, vertex: usize) -> Option<usize> {
        if vertex == self.either {
            Some(self.other)
        } else if vertex == self.other {
            Some(self.either)
        } else {
            None
        }
    }

    /// Returns both endpoints in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (usize, usize) { (self.either, self.other) }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the edge's position in its owning graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> EdgeId { self.id }

    /// Returns `true` when both endpoints coincide.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.either == self.other
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.either, self.other, self.weight)
    }
}

/// An undirected graph with weighted edges and per-vertex adjacency lists.
///
/// Parallel edges and self-loops are kept. A self-loop is listed twice in its
/// vertex's adjacency, once per endpoint.
///
/// # Examples
/// ```
/// use spanwise_core::EdgeWeightedGraph;
///
/// let graph = EdgeWeightedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, -2.5)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.adjacent(1)?.count(), 2);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeWeightedGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl EdgeWeightedGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds a graph from `(either, other, weight)` triples.
    ///
    /// # Errors
    /// Returns the first [`GraphError`] raised by [`Self::add_edge`].
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count);
        for (either, other, weight) in edges {
            graph.add_edge(either, other, weight)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge and returns its identifier.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when an endpoint is not below
    /// the vertex count and [`GraphError::NonFiniteWeight`] for NaN or infinite
    /// weights.
    pub fn add_edge(&mut self, either: usize, other: usize, weight: f64) -> Result<EdgeId, GraphError> {
        self.check_vertex(either)?;
        self.check_vertex(other)?;
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                either,
                other,
                weight,
            });
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(either, other, weight, id));
        for endpoint in [either, other] {
            if let Some(list) = self.adjacency.get_mut(endpoint) {
                list.push(id);
            }
        }
        Ok(id)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns every edge in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the edge with the given identifier, if it belongs to this graph.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.get())
    }

    /// Enumerates the edges incident to `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn adjacent(&self, vertex: usize) -> Result<impl Iterator<Item = &Edge> + '_, GraphError> {
        let list = self
            .adjacency
            .get(vertex)
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })?;
        Ok(list.iter().filter_map(|id| self.edges.get(id.get())))
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}

/// A graph paired with the external labels of its vertices.
///
/// Labels are for reporting only; no algorithm reads them.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledGraph {
    id: i64,
    description: String,
    graph: EdgeWeightedGraph,
    labels: Vec<String>,
}

impl LabeledGraph {
    /// Pairs `graph` with one label per vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::LabelCountMismatch`] when `labels` does not hold
    /// exactly one entry per vertex.
    pub fn new(
        id: i64,
        description: impl Into<String>,
        graph: EdgeWeightedGraph,
        labels: Vec<String>,
    ) -> Result<Self, GraphError> {
        if labels.len() != graph.vertex_count() {
            return Err(GraphError::LabelCountMismatch {
                labels: labels.len(),
                vertex_count: graph.vertex_count(),
            });
        }
        Ok(Self {
            id,
            description: description.into(),
            graph,
            labels,
        })
    }

    /// Returns the caller-supplied graph identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> i64 { self.id }

    /// Returns the free-form description.
    #[must_use]
    #[rustfmt::skip]
    pub fn description(&self) -> &str { &self.description }

    /// Returns the underlying graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &EdgeWeightedGraph { &self.graph }

    /// Returns the label of `vertex`.
    #[must_use]
    pub fn label(&self, vertex: usize) -> Option<&str> {
        self.labels.get(vertex).map(String::as_str)
    }

    /// Resolves both endpoint labels of `edge`.
    #[must_use]
    pub fn describe_edge(&self, edge: &Edge) -> Option<(&str, &str)> {
        let (either, other) = edge.endpoints();
        Some((self.label(either)?, self.label(other)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::either_out_of_range(3, 1)]
    #[case::other_out_of_range(0, 3)]
    fn add_edge_rejects_unknown_vertices(#[case] either: usize, #[case] other: usize) {
        let mut graph = EdgeWeightedGraph::new(3);
        let err = graph
            .add_edge(either, other, 1.0)
            .expect_err("endpoint 3 is outside a 3-vertex graph");
        assert_eq!(
            err,
            GraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn add_edge_rejects_non_finite_weights(#[case] weight: f64) {
        let mut graph = EdgeWeightedGraph::new(2);
        let err = graph.add_edge(0, 1, weight).expect_err("weight must be finite");
        assert!(matches!(
            err,
            GraphError::NonFiniteWeight {
                either: 0,
                other: 1,
                ..
            }
        ));
    }

    #[test]
    fn accepts_negative_and_zero_weights() {
        let graph = EdgeWeightedGraph::from_edges(3, [(0, 1, -4.0), (1, 2, 0.0)])
            .expect("negative and zero weights are valid");
        let weights: Vec<f64> = graph.edges().iter().map(Edge::weight).collect();
        assert_eq!(weights, vec![-4.0, 0.0]);
    }

    #[test]
    fn self_loop_appears_twice_in_adjacency() {
        let graph = EdgeWeightedGraph::from_edges(2, [(1, 1, 2.0), (0, 1, 1.0)])
            .expect("self-loops are stored");
        let ids: Vec<EdgeId> = graph
            .adjacent(1)
            .expect("vertex 1 exists")
            .map(Edge::id)
            .collect();
        assert_eq!(ids, vec![EdgeId::new(0), EdgeId::new(0), EdgeId::new(1)]);
        assert!(graph.edges()[0].is_self_loop());
    }

    #[test]
    fn adjacent_rejects_unknown_vertex() {
        let graph = EdgeWeightedGraph::new(1);
        assert!(matches!(
            graph.adjacent(1),
            Err(GraphError::VertexOutOfRange {
                vertex: 1,
                vertex_count: 1
            })
        ));
    }

    #[test]
    fn edge_ids_follow_insertion_order() {
        let graph = EdgeWeightedGraph::from_edges(3, [(0, 1, 1.0), (0, 1, 1.0), (1, 2, 3.0)])
            .expect("parallel edges are stored");
        for (position, edge) in graph.edges().iter().enumerate() {
            assert_eq!(edge.id(), EdgeId::new(position));
            assert_eq!(graph.edge(edge.id()), Some(edge));
        }
    }

    #[test]
    fn labeled_graph_resolves_endpoint_labels() {
        let graph = EdgeWeightedGraph::from_edges(2, [(0, 1, 3.0)]).expect("valid graph");
        let labeled = LabeledGraph::new(7, "pair", graph, vec!["A".into(), "B".into()])
            .expect("one label per vertex");
        let edge = labeled.graph().edges()[0];
        assert_eq!(labeled.describe_edge(&edge), Some(("A", "B")));
        assert_eq!(labeled.label(2), None);
        assert_eq!(labeled.id(), 7);
        assert_eq!(labeled.description(), "pair");
    }

    #[test]
    fn labeled_graph_rejects_label_count_mismatch() {
        let err = LabeledGraph::new(0, "", EdgeWeightedGraph::new(2), vec!["A".into()])
            .expect_err("two vertices need two labels");
        assert_eq!(
            err,
            GraphError::LabelCountMismatch {
                labels: 1,
                vertex_count: 2
            }
        );
    }
}
