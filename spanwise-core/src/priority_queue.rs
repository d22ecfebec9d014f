//! Indexed minimum priority queues.
//!
//! Elements are identified by an index in `0..capacity` and carry a key that
//! can be lowered in place. [`IndexMinPq`] is a binary heap with an
//! index-to-position map; [`InstrumentedIndexMinPq`] reports every mutating
//! call to an [`OperationObserver`] before delegating. Queries are not
//! counted.

use std::cmp::Ordering;

use crate::{
    error::MstError,
    metrics::{Metrics, Operation, OperationObserver},
};

/// Operations shared by indexed minimum priority queues.
pub trait IndexedMinQueue<K> {
    /// Queues `index` with `key`.
    ///
    /// # Errors
    /// Returns [`MstError::IndexOutOfRange`] or [`MstError::DuplicateIndex`].
    fn insert(&mut self, index: usize, key: K) -> Result<(), MstError>;

    /// Removes and returns the index with the smallest key.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyQueue`] when nothing is queued.
    fn del_min(&mut self) -> Result<usize, MstError>;

    /// Lowers the key of a queued index.
    ///
    /// # Errors
    /// Returns [`MstError::IndexOutOfRange`], [`MstError::AbsentIndex`], or
    /// [`MstError::KeyIncrease`] when `key` exceeds the current key.
    fn decrease_key(&mut self, index: usize, key: K) -> Result<(), MstError>;

    /// Returns `true` when `index` is queued. Out-of-range indices are never
    /// queued.
    fn contains(&self, index: usize) -> bool;

    /// Returns the number of queued indices.
    fn len(&self) -> usize;

    /// Returns `true` when nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Binary-heap indexed minimum priority queue with a fixed capacity.
///
/// Equal keys are ordered by index, so the smallest index wins ties.
///
/// # Examples
/// ```
/// use spanwise_core::{IndexMinPq, IndexedMinQueue};
///
/// let mut queue = IndexMinPq::new(4);
/// queue.insert(3, 2.0)?;
/// queue.insert(1, 5.0)?;
/// queue.decrease_key(1, 0.5)?;
/// assert_eq!(queue.del_min()?, 1);
/// assert_eq!(queue.del_min()?, 3);
/// assert!(queue.is_empty());
/// # Ok::<(), spanwise_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexMinPq<K> {
    heap: Vec<usize>,
    position: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
}

impl<K: Copy + PartialOrd> IndexMinPq<K> {
    /// Creates an empty queue accepting indices in `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            keys: vec![None; capacity],
        }
    }

    /// Returns the exclusive upper bound on indices.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    /// Returns the key currently associated with `index`.
    #[must_use]
    pub fn key_of(&self, index: usize) -> Option<K> {
        self.keys.get(index).copied().flatten()
    }

    /// Returns the index and key that [`IndexedMinQueue::del_min`] would remove.
    #[must_use]
    pub fn peek_min(&self) -> Option<(usize, K)> {
        let index = *self.heap.first()?;
        Some((index, self.key_of(index)?))
    }

    fn check(&self, index: usize) -> Result<(), MstError> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(MstError::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            })
        }
    }

    /// Compares the entries at heap slots `left` and `right`.
    fn less(&self, left: usize, right: usize) -> bool {
        let left_index = self.heap[left];
        let right_index = self.heap[right];
        match self.keys[left_index].partial_cmp(&self.keys[right_index]) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            Some(Ordering::Equal) | None => left_index < right_index,
        }
    }

    fn swap(&mut self, left: usize, right: usize) {
        self.heap.swap(left, right);
        self.position[self.heap[left]] = Some(left);
        self.position[self.heap[right]] = Some(right);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = slot * 2 + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let child = if right < self.heap.len() && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}

impl<K: Copy + PartialOrd> IndexedMinQueue<K> for IndexMinPq<K> {
    fn insert(&mut self, index: usize, key: K) -> Result<(), MstError> {
        self.check(index)?;
        if self.contains(index) {
            return Err(MstError::DuplicateIndex { index });
        }

        let slot = self.heap.len();
        self.heap.push(index);
        self.position[index] = Some(slot);
        self.keys[index] = Some(key);
        self.sift_up(slot);
        Ok(())
    }

    fn del_min(&mut self) -> Result<usize, MstError> {
        let last = self.heap.len().checked_sub(1).ok_or(MstError::EmptyQueue)?;
        let min = self.heap[0];
        self.swap(0, last);
        self.heap.pop();
        self.position[min] = None;
        self.keys[min] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn decrease_key(&mut self, index: usize, key: K) -> Result<(), MstError> {
        self.check(index)?;
        let slot = self.position[index].ok_or(MstError::AbsentIndex { index })?;
        if matches!(
            key.partial_cmp(&self.keys[index].ok_or(MstError::AbsentIndex { index })?),
            Some(Ordering::Greater)
        ) {
            return Err(MstError::KeyIncrease { index });
        }
        self.keys[index] = Some(key);
        self.sift_up(slot);
        Ok(())
    }

    fn contains(&self, index: usize) -> bool {
        matches!(self.position.get(index), Some(Some(_)))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// An [`IndexedMinQueue`] that reports `insert`, `del_min`, and
/// `decrease_key` calls to an [`OperationObserver`].
///
/// # Examples
/// ```
/// use spanwise_core::{Algorithm, IndexedMinQueue, InstrumentedIndexMinPq, Metrics};
///
/// let metrics = Metrics::new(Algorithm::Prim);
/// let mut queue = InstrumentedIndexMinPq::new(2, &metrics);
/// queue.insert(0, 1.0)?;
/// assert!(queue.contains(0));
/// queue.del_min()?;
/// assert_eq!(metrics.pq_inserts(), 1);
/// assert_eq!(metrics.pq_del_mins(), 1);
/// # Ok::<(), spanwise_core::MstError>(())
/// ```
#[derive(Debug)]
pub struct InstrumentedIndexMinPq<'m, K, O: OperationObserver + ?Sized = Metrics, Q = IndexMinPq<K>> {
    inner: Q,
    observer: &'m O,
    _key: std::marker::PhantomData<K>,
}

impl<'m, K: Copy + PartialOrd, O: OperationObserver + ?Sized> InstrumentedIndexMinPq<'m, K, O> {
    /// Creates an instrumented [`IndexMinPq`] with the given capacity.
    #[must_use]
    pub fn new(capacity: usize, observer: &'m O) -> Self {
        Self::wrap(IndexMinPq::new(capacity), observer)
    }
}

impl<'m, K, O: OperationObserver + ?Sized, Q: IndexedMinQueue<K>> InstrumentedIndexMinPq<'m, K, O, Q> {
    /// Decorates an existing queue.
    #[must_use]
    pub const fn wrap(inner: Q, observer: &'m O) -> Self {
        Self {
            inner,
            observer,
            _key: std::marker::PhantomData,
        }
    }

    /// Returns the wrapped queue, discarding the observer.
    #[must_use]
    pub fn into_inner(self) -> Q {
        self.inner
    }
}

impl<K, O: OperationObserver + ?Sized, Q: IndexedMinQueue<K>> IndexedMinQueue<K>
    for InstrumentedIndexMinPq<'_, K, O, Q>
{
    fn insert(&mut self, index: usize, key: K) -> Result<(), MstError> {
        self.observer.record(Operation::PqInsert);
        self.inner.insert(index, key)
    }

    fn del_min(&mut self) -> Result<usize, MstError> {
        self.observer.record(Operation::PqDelMin);
        self.inner.del_min()
    }

    fn decrease_key(&mut self, index: usize, key: K) -> Result<(), MstError> {
        self.observer.record(Operation::PqDecreaseKey);
        self.inner.decrease_key(index, key)
    }

    fn contains(&self, index: usize) -> bool {
        self.inner.contains(index)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
