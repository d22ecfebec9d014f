//! Minimum spanning tree (MST) construction.
//!
//! Two sequential algorithms share the same output shape:
//!
//! - [`KruskalMst`] sorts every edge by weight and accepts edges that join two
//!   different union-find components.
//! - [`PrimMst`] grows one tree per connected component, always attaching the
//!   cheapest frontier vertex taken from an indexed priority queue.
//!
//! Disconnected graphs produce a minimum spanning forest rather than an
//! error. Each run owns a fresh [`Metrics`] record and returns it alongside
//! the forest.

mod kruskal;
mod prim;
mod sort;

use crate::{graph::Edge, metrics::Metrics};

pub use self::{kruskal::KruskalMst, prim::PrimMst, sort::sort_by_counting};

/// The edges selected by an MST algorithm.
///
/// When the input graph is connected the forest is a single spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: f64,
    component_count: usize,
}

impl SpanningForest {
    pub(crate) fn new(vertex_count: usize, edges: Vec<Edge>, total_weight: f64) -> Self {
        let component_count = vertex_count.saturating_sub(edges.len());
        Self {
            edges,
            total_weight,
            component_count,
        }
    }

    /// Returns the selected edges in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the total weight reported by the algorithm.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of trees in the forest, isolated vertices included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// A completed algorithm run: the forest plus the run's metrics.
#[derive(Clone, Debug)]
pub struct MstRun {
    forest: SpanningForest,
    metrics: Metrics,
}

impl MstRun {
    pub(crate) const fn new(forest: SpanningForest, metrics: Metrics) -> Self {
        Self { forest, metrics }
    }

    /// Returns the computed forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest(&self) -> &SpanningForest { &self.forest }

    /// Returns the selected edges in discovery order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        self.forest.edges()
    }

    /// Returns the total weight of the forest.
    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.forest.total_weight()
    }

    /// Returns the metrics recorded during the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn metrics(&self) -> &Metrics { &self.metrics }

    /// Splits the run into its forest and metrics.
    #[must_use]
    pub fn into_parts(self) -> (SpanningForest, Metrics) {
        (self.forest, self.metrics)
    }
}

#[cfg(test)]
mod property;
