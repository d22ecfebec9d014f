//! Spanwise core library.
//!
//! Computes minimum spanning forests of undirected edge-weighted graphs with
//! Kruskal's and Prim's algorithms, counts the elementary operations each run
//! performs, and independently validates the results.
//!
//! # Examples
//! ```
//! use spanwise_core::{EdgeWeightedGraph, KruskalMst, MstValidator, PrimMst};
//!
//! let graph = EdgeWeightedGraph::from_edges(
//!     4,
//!     [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)],
//! )?;
//! let kruskal = KruskalMst::compute(&graph)?;
//! let prim = PrimMst::compute(&graph)?;
//! assert_eq!(kruskal.total_weight(), prim.total_weight());
//! assert!(MstValidator::validate(&graph, prim.edges(), prim.total_weight())?.is_valid());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod compare;
mod error;
mod graph;
mod metrics;
mod mst;
mod priority_queue;
mod union_find;
mod validator;

#[cfg(test)]
mod test_utils;

pub use crate::{
    compare::{
        AlgorithmReport, GraphComparison, WEIGHT_AGREEMENT_TOLERANCE, compare_algorithms,
        compare_batch,
    },
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode, Result},
    graph::{Edge, EdgeId, EdgeWeightedGraph, LabeledGraph},
    metrics::{Algorithm, Metrics, MetricsSnapshot, Operation, OperationObserver},
    mst::{KruskalMst, MstRun, PrimMst, SpanningForest, sort_by_counting},
    priority_queue::{IndexMinPq, IndexedMinQueue, InstrumentedIndexMinPq},
    union_find::{DisjointSet, InstrumentedUnionFind, UnionFind},
    validator::{
        MstValidator, VALIDATION_TOLERANCE, ValidationFailure, ValidationFailureCode, Verdict,
    },
};
