#![forbid(unsafe_code)]

//! The run model: contiguous sub-sequences produced by the split phase and
//! consumed by merge passes.
//!
//! A [`Run`] starts life as a contiguous slice of the input, is replaced
//! wholesale by its sorted version during the per-run sort phase, and is
//! consumed (replaced by merge output) during merge passes until exactly one
//! run remains. A [`Generation`] is the full ordered list of runs existing
//! after a given phase or pass.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contiguous, independently-sortable sub-sequence of the input.
///
/// Runs are never empty except in the degenerate zero-length-input case.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Run {
    values: Vec<f64>,
}

impl Run {
    /// Create a run owning the given values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Create a run by copying a slice.
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Number of values in the run.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the run holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The run's values in order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable access to the values, for the per-run sort phase.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Consume the run, yielding its values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Whether the values are in non-decreasing order (NaN-tolerant via
    /// total ordering).
    pub fn is_sorted(&self) -> bool {
        self.values
            .windows(2)
            .all(|w| w[0].total_cmp(&w[1]) != std::cmp::Ordering::Greater)
    }
}

impl From<Vec<f64>> for Run {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// The ordered list of runs existing after a given phase or pass.
///
/// Invariant: at generation 0 the concatenation of all runs equals the full
/// input; at every later generation the multiset union of all runs' values
/// equals the original input's multiset.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Generation {
    runs: Vec<Run>,
}

impl Generation {
    /// Create a generation from an ordered list of runs.
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// The runs in order.
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Mutable access to the runs, for the per-run sort phase.
    #[inline]
    pub fn runs_mut(&mut self) -> &mut [Run] {
        &mut self.runs
    }

    /// Number of runs.
    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the generation holds no runs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total number of values across all runs.
    pub fn total_len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// The first run, if any.
    pub fn first(&self) -> Option<&Run> {
        self.runs.first()
    }

    /// Consume the generation, yielding its runs.
    pub fn into_runs(self) -> Vec<Run> {
        self.runs
    }

    /// All values across all runs, sorted by total order.
    ///
    /// Two generations over the same underlying data compare equal under
    /// this view regardless of how values are distributed across runs,
    /// which makes it the tool for multiset-preservation checks.
    pub fn value_multiset(&self) -> Vec<f64> {
        let mut all: Vec<f64> = self
            .runs
            .iter()
            .flat_map(|r| r.values().iter().copied())
            .collect();
        all.sort_unstable_by(f64::total_cmp);
        all
    }
}

impl From<Vec<Run>> for Generation {
    fn from(runs: Vec<Run>) -> Self {
        Self::new(runs)
    }
}
