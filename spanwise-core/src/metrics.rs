//! Operation counters and timing for a single algorithm run.
//!
//! A [`Metrics`] value is created when a run starts and is owned by that run
//! alone. Counters live in [`Cell`]s so the run can lend `&Metrics` to its
//! union-find and priority queue at the same time as it records its own
//! comparisons. Once the run returns, the record is read-only in practice:
//! nothing outside the run holds a reference that could still bump it.
//!
//! When the `metrics` feature is enabled each completed run also publishes:
//!
//! - `spanwise_<operation>_total` (counter, labelled by `algorithm`)
//! - `spanwise_run_duration_ms` (histogram, labelled by `algorithm`)

use std::{cell::Cell, fmt, time::Instant};

/// Identifies which MST algorithm produced a [`Metrics`] record.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Kruskal's edge-sorting algorithm.
    Kruskal,
    /// Prim's vertex-growing algorithm.
    Prim,
}

impl Algorithm {
    /// Returns the stable tag used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A countable operation performed during a run.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    /// A weight comparison (sort comparisons for Kruskal, relaxation tests for Prim).
    Comparison,
    /// A union-find `find` call.
    Find,
    /// A union-find `union` call.
    Union,
    /// An edge examined by the main loop of an algorithm.
    EdgeInspected,
    /// A priority-queue insertion.
    PqInsert,
    /// A priority-queue delete-min.
    PqDelMin,
    /// A priority-queue decrease-key.
    PqDecreaseKey,
}

impl Operation {
    /// Every operation, in reporting order.
    pub const ALL: [Self; 7] = [
        Self::Comparison,
        Self::Find,
        Self::Union,
        Self::EdgeInspected,
        Self::PqInsert,
        Self::PqDelMin,
        Self::PqDecreaseKey,
    ];

    /// Returns the snake-case counter name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comparison => "comparisons",
            Self::Find => "finds",
            Self::Union => "unions",
            Self::EdgeInspected => "edges_inspected",
            Self::PqInsert => "pq_inserts",
            Self::PqDelMin => "pq_del_mins",
            Self::PqDecreaseKey => "pq_decrease_keys",
        }
    }

    #[cfg(feature = "metrics")]
    const fn metric_name(self) -> &'static str {
        match self {
            Self::Comparison => "spanwise_comparisons_total",
            Self::Find => "spanwise_finds_total",
            Self::Union => "spanwise_unions_total",
            Self::EdgeInspected => "spanwise_edges_inspected_total",
            Self::PqInsert => "spanwise_pq_inserts_total",
            Self::PqDelMin => "spanwise_pq_del_mins_total",
            Self::PqDecreaseKey => "spanwise_pq_decrease_keys_total",
        }
    }
}

/// Receives a notification for every counted operation.
///
/// Instrumented primitives are generic over this hook so the counting concern
/// stays independent of the data structure being counted.
pub trait OperationObserver {
    /// Records one occurrence of `operation`.
    fn record(&self, operation: Operation);
}

impl<O: OperationObserver + ?Sized> OperationObserver for &O {
    fn record(&self, operation: Operation) {
        (**self).record(operation);
    }
}

/// Counters and elapsed time for one algorithm run.
///
/// # Examples
/// ```
/// use spanwise_core::{Algorithm, Metrics, Operation, OperationObserver};
///
/// let mut metrics = Metrics::new(Algorithm::Prim);
/// metrics.start_timer();
/// metrics.record(Operation::PqInsert);
/// metrics.record(Operation::PqDelMin);
/// metrics.stop_timer();
///
/// assert_eq!(metrics.pq_inserts(), 1);
/// assert_eq!(metrics.pq_del_mins(), 1);
/// assert!(metrics.elapsed_ms() >= 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Metrics {
    algorithm: Algorithm,
    comparisons: Cell<u64>,
    finds: Cell<u64>,
    unions: Cell<u64>,
    edges_inspected: Cell<u64>,
    pq_inserts: Cell<u64>,
    pq_del_mins: Cell<u64>,
    pq_decrease_keys: Cell<u64>,
    started: Option<Instant>,
    elapsed_ms: f64,
}

impl Metrics {
    /// Creates a zeroed record for `algorithm`.
    #[must_use]
    pub const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            comparisons: Cell::new(0),
            finds: Cell::new(0),
            unions: Cell::new(0),
            edges_inspected: Cell::new(0),
            pq_inserts: Cell::new(0),
            pq_del_mins: Cell::new(0),
            pq_decrease_keys: Cell::new(0),
            started: None,
            elapsed_ms: 0.0,
        }
    }

    /// Returns the algorithm tag.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Starts the timer. A start that was never stopped is discarded.
    pub fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stops the timer and stores the elapsed time. Does nothing when the
    /// timer is not running.
    pub fn stop_timer(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;
        }
    }

    /// Returns the elapsed time of the last completed start/stop pair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed_ms(&self) -> f64 { self.elapsed_ms }

    /// Returns the current value of the counter for `operation`.
    #[must_use]
    pub fn count(&self, operation: Operation) -> u64 {
        self.cell(operation).get()
    }

    /// Returns the comparison count.
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    /// Returns the union-find `find` count.
    #[must_use]
    pub fn finds(&self) -> u64 {
        self.finds.get()
    }

    /// Returns the union-find `union` count.
    #[must_use]
    pub fn unions(&self) -> u64 {
        self.unions.get()
    }

    /// Returns the number of inspected edges.
    #[must_use]
    pub fn edges_inspected(&self) -> u64 {
        self.edges_inspected.get()
    }

    /// Returns the priority-queue insertion count.
    #[must_use]
    pub fn pq_inserts(&self) -> u64 {
        self.pq_inserts.get()
    }

    /// Returns the priority-queue delete-min count.
    #[must_use]
    pub fn pq_del_mins(&self) -> u64 {
        self.pq_del_mins.get()
    }

    /// Returns the priority-queue decrease-key count.
    #[must_use]
    pub fn pq_decrease_keys(&self) -> u64 {
        self.pq_decrease_keys.get()
    }

    /// Copies the current state into a plain record for reporting.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            algorithm: self.algorithm,
            elapsed_ms: self.elapsed_ms,
            comparisons: self.comparisons(),
            finds: self.finds(),
            unions: self.unions(),
            edges_inspected: self.edges_inspected(),
            pq_inserts: self.pq_inserts(),
            pq_del_mins: self.pq_del_mins(),
            pq_decrease_keys: self.pq_decrease_keys(),
        }
    }

    const fn cell(&self, operation: Operation) -> &Cell<u64> {
        match operation {
            Operation::Comparison => &self.comparisons,
            Operation::Find => &self.finds,
            Operation::Union => &self.unions,
            Operation::EdgeInspected => &self.edges_inspected,
            Operation::PqInsert => &self.pq_inserts,
            Operation::PqDelMin => &self.pq_del_mins,
            Operation::PqDecreaseKey => &self.pq_decrease_keys,
        }
    }

    #[cfg(feature = "metrics")]
    pub(crate) fn publish(&self) {
        let algorithm = self.algorithm.as_str();
        for operation in Operation::ALL {
            metrics::counter!(operation.metric_name(), "algorithm" => algorithm)
                .increment(self.count(operation));
        }
        metrics::histogram!("spanwise_run_duration_ms", "algorithm" => algorithm)
            .record(self.elapsed_ms);
    }

    #[cfg(not(feature = "metrics"))]
    #[expect(
        clippy::unused_self,
        reason = "keeps call sites identical with and without the metrics feature"
    )]
    pub(crate) const fn publish(&self) {}
}

impl OperationObserver for Metrics {
    fn record(&self, operation: Operation) {
        let cell = self.cell(operation);
        cell.set(cell.get().saturating_add(1));
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: time={:.3} ms, comps={}, finds={}, unions={}, edgesInspected={}, \
             pqInserts={}, pqDelMins={}, pqDecreaseKeys={}",
            self.algorithm,
            self.elapsed_ms,
            self.comparisons(),
            self.finds(),
            self.unions(),
            self.edges_inspected(),
            self.pq_inserts(),
            self.pq_del_mins(),
            self.pq_decrease_keys(),
        )
    }
}

/// A plain copy of a [`Metrics`] record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricsSnapshot {
    /// Algorithm that produced the record.
    pub algorithm: Algorithm,
    /// Elapsed wall-clock time in milliseconds.
    pub elapsed_ms: f64,
    /// Weight comparisons.
    pub comparisons: u64,
    /// Union-find `find` calls.
    pub finds: u64,
    /// Union-find `union` calls.
    pub unions: u64,
    /// Edges inspected by the main loop.
    pub edges_inspected: u64,
    /// Priority-queue insertions.
    pub pq_inserts: u64,
    /// Priority-queue delete-mins.
    pub pq_del_mins: u64,
    /// Priority-queue decrease-keys.
    pub pq_decrease_keys: u64,
}
