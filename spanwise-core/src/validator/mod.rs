//! Independent verification of candidate spanning forests.
//!
//! [`MstValidator`] needs nothing but the original graph, the candidate edge
//! list, and the weight the producer declared for it. Four checks run in
//! order and the first failure wins:
//!
//! 1. the candidate weights sum to the declared weight;
//! 2. every candidate edge is an edge of the graph and none closes a cycle;
//! 3. every graph edge joins vertices the candidate connects;
//! 4. no graph edge crossing the cut left by removing a candidate edge is
//!    lighter than that candidate edge.
//!
//! The cut check rebuilds a union-find per candidate edge, so validation is
//! quadratic in the worst case.

use thiserror::Error;
use tracing::{instrument, warn};

use crate::{
    error::{MstError, define_error_codes},
    graph::{Edge, EdgeWeightedGraph},
    union_find::{DisjointSet, UnionFind},
};

/// Absolute tolerance for weight sums and cut comparisons.
pub const VALIDATION_TOLERANCE: f64 = 1e-12;

/// Why a candidate was rejected.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationFailure {
    /// The candidate's weights do not add up to the declared weight.
    #[error("candidate weighs {computed} but {declared} was declared")]
    WeightMismatch {
        /// Sum of the candidate edge weights.
        computed: f64,
        /// Weight reported by the producer.
        declared: f64,
    },
    /// A candidate edge does not match the graph edge carrying its id.
    #[error("candidate edge {edge} is not an edge of the graph")]
    ForeignEdge {
        /// The unmatched candidate edge.
        edge: Edge,
    },
    /// A candidate edge joins two vertices that are already connected.
    #[error("candidate edge {edge} closes a cycle")]
    Cycle {
        /// The first edge found to repeat a union.
        edge: Edge,
    },
    /// A graph edge joins vertices the candidate leaves disconnected.
    #[error("graph edge {edge} joins vertices the candidate leaves disconnected")]
    NotSpanning {
        /// The graph edge whose endpoints are not connected.
        edge: Edge,
    },
    /// Swapping a candidate edge for a lighter graph edge would lower the
    /// total weight.
    #[error("graph edge {lighter_edge} is lighter than candidate edge {tree_edge} across its cut")]
    NotMinimal {
        /// The candidate edge that should have been replaced.
        tree_edge: Edge,
        /// The lighter graph edge crossing the same cut.
        lighter_edge: Edge,
    },
}

define_error_codes! {
    /// Stable codes describing [`ValidationFailure`] variants.
    enum ValidationFailureCode for ValidationFailure {
        /// The weight check failed.
        WeightMismatch => WeightMismatch { .. } => "VALIDATION_WEIGHT_MISMATCH",
        /// A candidate edge is not part of the graph.
        ForeignEdge => ForeignEdge { .. } => "VALIDATION_FOREIGN_EDGE",
        /// The acyclicity check failed.
        Cycle => Cycle { .. } => "VALIDATION_CYCLE",
        /// The spanning check failed.
        NotSpanning => NotSpanning { .. } => "VALIDATION_NOT_SPANNING",
        /// The cut optimality check failed.
        NotMinimal => NotMinimal { .. } => "VALIDATION_NOT_MINIMAL",
    }
}

/// Outcome of validating a candidate.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// The candidate is a minimum spanning forest of the graph.
    Valid,
    /// The candidate failed a check.
    Invalid(ValidationFailure),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the failure behind an invalid verdict.
    #[must_use]
    pub const fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Valid => None,
            Self::Invalid(failure) => Some(failure),
        }
    }
}

/// Checks candidate spanning forests against their source graph.
///
/// # Examples
/// ```
/// use spanwise_core::{EdgeWeightedGraph, KruskalMst, MstValidator};
///
/// let graph = EdgeWeightedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)])?;
/// let run = KruskalMst::compute(&graph)?;
/// let verdict = MstValidator::validate(&graph, run.edges(), run.total_weight())?;
/// assert!(verdict.is_valid());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MstValidator;

impl MstValidator {
    /// Validates `candidate` as a minimum spanning forest of `graph` weighing
    /// `declared_weight`.
    ///
    /// Candidate edges are identified by their position in the slice, so two
    /// equal candidate edges count as distinct tree edges.
    ///
    /// # Errors
    /// Returns [`MstError::IndexOutOfRange`] when a candidate edge references
    /// a vertex outside the graph.
    #[instrument(
        name = "mst.validate",
        err,
        skip(graph, candidate),
        fields(vertices = graph.vertex_count(), candidate_edges = candidate.len()),
    )]
    pub fn validate(
        graph: &EdgeWeightedGraph,
        candidate: &[Edge],
        declared_weight: f64,
    ) -> Result<Verdict, MstError> {
        let Some(failure) = first_failure(graph, candidate, declared_weight)? else {
            return Ok(Verdict::Valid);
        };
        warn!(code = %failure.code(), %failure, "candidate rejected");
        Ok(Verdict::Invalid(failure))
    }
}

fn first_failure(
    graph: &EdgeWeightedGraph,
    candidate: &[Edge],
    declared_weight: f64,
) -> Result<Option<ValidationFailure>, MstError> {
    let computed: f64 = candidate.iter().map(Edge::weight).sum();
    // A NaN declared weight is never within tolerance.
    let within_tolerance = (computed - declared_weight).abs() <= VALIDATION_TOLERANCE;
    if !within_tolerance {
        return Ok(Some(ValidationFailure::WeightMismatch {
            computed,
            declared: declared_weight,
        }));
    }

    let mut forest = DisjointSet::new(graph.vertex_count());
    for edge in candidate {
        let (either, other) = edge.endpoints();
        let joined = forest.union(either, other)?;
        if graph.edge(edge.id()) != Some(edge) {
            return Ok(Some(ValidationFailure::ForeignEdge { edge: *edge }));
        }
        if !joined {
            return Ok(Some(ValidationFailure::Cycle { edge: *edge }));
        }
    }

    for edge in graph.edges() {
        let (either, other) = edge.endpoints();
        if !forest.connected(either, other)? {
            return Ok(Some(ValidationFailure::NotSpanning { edge: *edge }));
        }
    }

    for (position, tree_edge) in candidate.iter().enumerate() {
        if let Some(lighter_edge) = lighter_crossing_edge(graph, candidate, position)? {
            return Ok(Some(ValidationFailure::NotMinimal {
                tree_edge: *tree_edge,
                lighter_edge,
            }));
        }
    }
    Ok(None)
}

/// Finds a graph edge crossing the cut left by removing `candidate[position]`
/// that is lighter than the removed edge.
fn lighter_crossing_edge(
    graph: &EdgeWeightedGraph,
    candidate: &[Edge],
    position: usize,
) -> Result<Option<Edge>, MstError> {
    let Some(removed) = candidate.get(position) else {
        return Ok(None);
    };
    let mut sides = DisjointSet::new(graph.vertex_count());
    for (index, edge) in candidate.iter().enumerate() {
        if index != position {
            let (either, other) = edge.endpoints();
            sides.union(either, other)?;
        }
    }

    let (left, right) = removed.endpoints();
    let cut = (sides.find(left)?, sides.find(right)?);
    let threshold = removed.weight() - VALIDATION_TOLERANCE;
    for edge in graph.edges() {
        if edge.weight() >= threshold {
            continue;
        }
        let (either, other) = edge.endpoints();
        let span = (sides.find(either)?, sides.find(other)?);
        if span == cut || span == (cut.1, cut.0) {
            return Ok(Some(*edge));
        }
    }
    Ok(None)
}
