//! Comparison-counting sort.

use std::cmp::Ordering;

use crate::metrics::{Operation, OperationObserver};

/// Stable-sorts `items` with `compare`, recording one
/// [`Operation::Comparison`] for every comparison the sort performs.
///
/// `compare` stays a pure function; the counting lives here.
///
/// # Examples
/// ```
/// use spanwise_core::{Algorithm, Metrics, sort_by_counting};
///
/// let metrics = Metrics::new(Algorithm::Kruskal);
/// let mut values = vec![3, 1, 2];
/// sort_by_counting(&mut values, &metrics, |a: &i32, b: &i32| a.cmp(b));
/// assert_eq!(values, [1, 2, 3]);
/// assert!(metrics.comparisons() >= 2);
/// ```
pub fn sort_by_counting<T, O, F>(items: &mut [T], observer: &O, compare: F)
where
    O: OperationObserver + ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    items.sort_by(|left, right| {
        observer.record(Operation::Comparison);
        compare(left, right)
    });
}
