#![forbid(unsafe_code)]

//! The observer seam between the engine and its consumers.
//!
//! The engine drives a [`StepObserver`] synchronously: it fully suspends
//! until `on_step` returns before producing the next step. A visualizer
//! paces animation by blocking inside the callback; a test harness collects
//! records and returns immediately. Ordering is strict — steps arrive in
//! exactly the order the algorithm produces them, never batched or
//! reordered.

use crate::step::StepRecord;

/// Consumer of the engine's step stream and progress reports.
pub trait StepObserver {
    /// Called once per emitted step. The engine does not proceed until this
    /// returns.
    fn on_step(&mut self, step: &StepRecord);

    /// Advisory progress report: a monotonically non-decreasing percent in
    /// `[0, 100]` and a human-readable phase description. Purely
    /// observational; the default does nothing.
    fn on_progress(&mut self, _percent: f64, _message: &str) {}
}

/// Closures over step records are observers with no progress handling.
impl<F: FnMut(&StepRecord)> StepObserver for F {
    fn on_step(&mut self, step: &StepRecord) {
        self(step);
    }
}

/// Observer that discards everything. Useful when only the sorted result
/// matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn on_step(&mut self, _step: &StepRecord) {}
}

/// Observer that retains every step and progress report, for assertions.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Default)]
pub struct CollectingObserver {
    /// Every step received, in arrival order.
    pub steps: Vec<StepRecord>,
    /// Every `(percent, message)` progress report, in arrival order.
    pub progress: Vec<(f64, String)>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl CollectingObserver {
    /// An empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kind names of the collected steps, in order.
    pub fn kind_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(StepRecord::kind_name).collect()
    }

    /// Number of collected steps with the given kind name.
    pub fn count_of(&self, kind_name: &str) -> usize {
        self.steps
            .iter()
            .filter(|s| s.kind_name() == kind_name)
            .count()
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl StepObserver for CollectingObserver {
    fn on_step(&mut self, step: &StepRecord) {
        self.steps.push(step.clone());
    }

    fn on_progress(&mut self, percent: f64, message: &str) {
        self.progress.push((percent, message.to_string()));
    }
}
