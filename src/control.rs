//! Time budget and metric collaborators polled by the search loops.
//!
//! Both traits require `Sync`: independent runs executing on separate
//! workers share one budget and one sink.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Poll-only stop signal, checked once per iteration.
pub trait TimeBudget: Sync {
    /// Returns `true` once the search should stop.
    fn is_time_up(&self) -> bool;
}

/// Never runs out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl TimeBudget for Unlimited {
    fn is_time_up(&self) -> bool {
        false
    }
}

/// Wall-clock budget starting at construction.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Duration,
}

impl Deadline {
    /// Budget that expires `limit` from now.
    pub fn after(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// Budget that expires `ms` milliseconds from now.
    pub fn after_millis(ms: u64) -> Self {
        Self::after(Duration::from_millis(ms))
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl TimeBudget for Deadline {
    fn is_time_up(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// External cancellation flag.
impl TimeBudget for Arc<AtomicBool> {
    fn is_time_up(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: TimeBudget + ?Sized> TimeBudget for &T {
    fn is_time_up(&self) -> bool {
        (**self).is_time_up()
    }
}

/// Append-only sink of best-objective samples.
pub trait MetricSink: Sync {
    /// Called every time a search improves its best feasible score.
    fn best_improved(&self, objective: f64);
}

/// Discards every sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetrics;

impl MetricSink for NoMetrics {
    fn best_improved(&self, _objective: f64) {}
}

impl<T: MetricSink + ?Sized> MetricSink for &T {
    fn best_improved(&self, objective: f64) {
        (**self).best_improved(objective)
    }
}

/// One recorded improvement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveSample {
    /// Time since the trace was created.
    pub elapsed: Duration,
    /// Objective value reported.
    pub objective: f64,
}

/// Thread-safe trace of best-objective samples, timestamped relative to its
/// creation.
#[derive(Debug)]
pub struct ObjectiveTrace {
    start: Instant,
    samples: Mutex<Vec<ObjectiveSample>>,
}

impl Default for ObjectiveTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectiveTrace {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            samples: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the recorded samples in arrival order.
    pub fn samples(&self) -> Vec<ObjectiveSample> {
        self.samples
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Snapshot of the recorded objective values in arrival order.
    pub fn objectives(&self) -> Vec<f64> {
        self.samples().into_iter().map(|s| s.objective).collect()
    }
}

impl MetricSink for ObjectiveTrace {
    fn best_improved(&self, objective: f64) {
        let sample = ObjectiveSample {
            elapsed: self.start.elapsed(),
            objective,
        };
        self.samples
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(sample);
    }
}
