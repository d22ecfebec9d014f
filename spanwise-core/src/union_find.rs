//! Union-find (disjoint set union) structures.
//!
//! [`DisjointSet`] is the plain structure used by the validator.
//! [`InstrumentedUnionFind`] decorates any [`UnionFind`] so every `find` and
//! `union` call is reported to an [`OperationObserver`] before it is
//! delegated. Kruskal runs use the instrumented form.

use crate::{
    error::MstError,
    metrics::{Metrics, Operation, OperationObserver},
};

/// Operations shared by union-find implementations.
pub trait UnionFind {
    /// Returns the number of elements tracked.
    fn len(&self) -> usize;

    /// Returns `true` when no elements are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// # Errors
    /// Returns [`MstError::IndexOutOfRange`] when `element >= len()`.
    fn find(&mut self, element: usize) -> Result<usize, MstError>;

    /// Merges the sets containing `left` and `right`, returning `true` when
    /// they were distinct.
    ///
    /// # Errors
    /// Returns [`MstError::IndexOutOfRange`] when either element is out of
    /// range.
    fn union(&mut self, left: usize, right: usize) -> Result<bool, MstError>;
}

/// Union-find with path compression and union by rank.
///
/// Equal ranks are merged under the lower root index so repeated runs build
/// identical forests.
///
/// # Examples
/// ```
/// use spanwise_core::{DisjointSet, UnionFind};
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert_eq!(sets.find(1)?, sets.find(0)?);
/// assert_eq!(sets.components(), 3);
/// # Ok::<(), spanwise_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Errors
    /// Returns [`MstError::IndexOutOfRange`] for an out-of-range element.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, MstError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, element: usize) -> Result<(), MstError> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(MstError::IndexOutOfRange {
                index: element,
                capacity: self.parent.len(),
            })
        }
    }
}

impl UnionFind for DisjointSet {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn find(&mut self, element: usize) -> Result<usize, MstError> {
        self.check(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        Ok(root)
    }

    fn union(&mut self, left: usize, right: usize) -> Result<bool, MstError> {
        let left = self.find(left)?;
        let right = self.find(right)?;
        if left == right {
            return Ok(false);
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        let (root, child) = match left_rank.cmp(&right_rank) {
            std::cmp::Ordering::Greater => (left, right),
            std::cmp::Ordering::Less => (right, left),
            std::cmp::Ordering::Equal => (left.min(right), left.max(right)),
        };

        self.parent[child] = root;
        if left_rank == right_rank {
            self.rank[root] = self.rank[root].saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }
}

/// A [`UnionFind`] that reports every call to an [`OperationObserver`].
///
/// The observer sees the call before it is delegated, so a call that fails
/// its bounds check is still counted.
///
/// # Examples
/// ```
/// use spanwise_core::{Algorithm, InstrumentedUnionFind, Metrics, UnionFind};
///
/// let metrics = Metrics::new(Algorithm::Kruskal);
/// let mut sets = InstrumentedUnionFind::new(3, &metrics);
/// sets.find(0)?;
/// sets.union(0, 2)?;
/// assert_eq!(metrics.finds(), 1);
/// assert_eq!(metrics.unions(), 1);
/// # Ok::<(), spanwise_core::MstError>(())
/// ```
#[derive(Debug)]
pub struct InstrumentedUnionFind<'m, O: OperationObserver + ?Sized = Metrics, U = DisjointSet> {
    inner: U,
    observer: &'m O,
}

impl<'m, O: OperationObserver + ?Sized> InstrumentedUnionFind<'m, O, DisjointSet> {
    /// Creates an instrumented [`DisjointSet`] over `n` elements.
    #[must_use]
    pub fn new(n: usize, observer: &'m O) -> Self {
        Self::wrap(DisjointSet::new(n), observer)
    }
}

impl<'m, O: OperationObserver + ?Sized, U: UnionFind> InstrumentedUnionFind<'m, O, U> {
    /// Decorates an existing union-find.
    #[must_use]
    pub const fn wrap(inner: U, observer: &'m O) -> Self {
        Self { inner, observer }
    }

    /// Returns the wrapped structure, discarding the observer.
    #[must_use]
    pub fn into_inner(self) -> U {
        self.inner
    }
}

impl<O: OperationObserver + ?Sized, U: UnionFind> UnionFind for InstrumentedUnionFind<'_, O, U> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn find(&mut self, element: usize) -> Result<usize, MstError> {
        self.observer.record(Operation::Find);
        self.inner.find(element)
    }

    fn union(&mut self, left: usize, right: usize) -> Result<bool, MstError> {
        self.observer.record(Operation::Union);
        self.inner.union(left, right)
    }
}
