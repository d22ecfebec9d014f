//! Error types for the spanwise core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this value."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// An error raised while building an [`crate::EdgeWeightedGraph`] or querying
/// its adjacency.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index was not below the graph's vertex count.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge ({either}, {other}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// First endpoint as supplied.
        either: usize,
        /// Second endpoint as supplied.
        other: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// A label array did not hold exactly one label per vertex.
    #[error("{labels} labels supplied for a graph with {vertex_count} vertices")]
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index was not below the graph's vertex count.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// A label array did not match the vertex count.
        LabelCountMismatch => LabelCountMismatch { .. } => "GRAPH_LABEL_COUNT_MISMATCH",
    }
}

/// Precondition violations raised by the MST primitives and algorithms.
///
/// Each of these aborts the current run. They are never retried because every
/// algorithm here is a deterministic function of its input graph.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// An index passed to union-find or the priority queue was out of range.
    #[error("index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Capacity of the structure that rejected it.
        capacity: usize,
    },
    /// `insert` was called for an index that is already queued.
    #[error("index {index} is already in the priority queue")]
    DuplicateIndex {
        /// The duplicated index.
        index: usize,
    },
    /// `decrease_key` was called for an index that is not queued.
    #[error("index {index} is not in the priority queue")]
    AbsentIndex {
        /// The missing index.
        index: usize,
    },
    /// `del_min` was called on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,
    /// `decrease_key` was called with a key larger than the current one.
    #[error("decrease_key for index {index} would increase its key")]
    KeyIncrease {
        /// The index whose key would have grown.
        index: usize,
    },
    /// The input graph reported an inconsistent structure.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// An internal invariant was violated, indicating a logic error.
    #[error("MST invariant violated: {invariant} (vertex {vertex})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The vertex being processed when the violation was detected.
        vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An index was out of range.
        IndexOutOfRange => IndexOutOfRange { .. } => "MST_INDEX_OUT_OF_RANGE",
        /// An index was inserted twice.
        DuplicateIndex => DuplicateIndex { .. } => "MST_DUPLICATE_INDEX",
        /// A key was decreased for an absent index.
        AbsentIndex => AbsentIndex { .. } => "MST_ABSENT_INDEX",
        /// The priority queue was empty.
        EmptyQueue => EmptyQueue => "MST_EMPTY_QUEUE",
        /// A key would have increased.
        KeyIncrease => KeyIncrease { .. } => "MST_KEY_INCREASE",
        /// The input graph was inconsistent.
        Graph => Graph(..) => "MST_GRAPH",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

impl MstError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in the graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
