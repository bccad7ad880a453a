#![forbid(unsafe_code)]

//! Step records: immutable snapshots of algorithm state at each observable
//! event.
//!
//! The engine emits one [`StepRecord`] per phase transition and per merge
//! comparison, in strict chronological order. Each record is self-contained
//! (full run contents, not deltas), so replaying any record to a display
//! never depends on side effects from other records.
//!
//! Records carry monotonic nanosecond timestamps relative to the start of
//! the sort call, stamped by the engine as they are emitted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::run::{Generation, Run};

/// Which source run the last merged element was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MergeSide {
    Left,
    Right,
}

/// One observable event in a sort, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "step"))]
pub enum StepKind {
    /// The input has been partitioned into runs.
    #[cfg_attr(feature = "serde", serde(rename = "split"))]
    Split {
        /// All runs, in input order.
        runs: Generation,
    },

    /// One run has been sorted in place.
    #[cfg_attr(feature = "serde", serde(rename = "run_sorted"))]
    RunSorted {
        /// The full current generation, with runs `0..=active_run` sorted.
        runs: Generation,
        /// Index of the run that was just sorted.
        active_run: usize,
    },

    /// One merge comparison resolved and one element was appended.
    ///
    /// This is the finest-grained trace unit and the primary driver of
    /// animation pacing.
    #[cfg_attr(feature = "serde", serde(rename = "merge_progress"))]
    MergeProgress {
        /// The left source run of the pair being merged.
        left: Run,
        /// The right source run of the pair being merged.
        right: Run,
        /// The partial merge result so far, including the element just taken.
        merged: Vec<f64>,
        /// Elements consumed from the left run so far.
        left_taken: usize,
        /// Elements consumed from the right run so far.
        right_taken: usize,
        /// Which side the element just appended came from.
        took: MergeSide,
    },

    /// The sort finished (or was truncated by cancellation).
    #[cfg_attr(feature = "serde", serde(rename = "complete"))]
    Complete {
        /// The surviving run; its values are the sort result.
        result: Run,
    },
}

impl StepKind {
    /// Stable name of the kind, matching the serde tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Split { .. } => "split",
            Self::RunSorted { .. } => "run_sorted",
            Self::MergeProgress { .. } => "merge_progress",
            Self::Complete { .. } => "complete",
        }
    }
}

/// An immutable, timestamped snapshot of one observable event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepRecord {
    /// Nanoseconds since the start of the sort call.
    pub ts_ns: u64,
    /// The event payload.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: StepKind,
}

impl StepRecord {
    /// Create a record stamped with the given offset from sort start.
    pub fn new(ts_ns: u64, kind: StepKind) -> Self {
        Self { ts_ns, kind }
    }

    /// Stable name of the record's kind.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}
