#![forbid(unsafe_code)]

//! Step trace recording and replay.
//!
//! A [`StepTrace`] is the ordered, immutable list of [`StepRecord`]s one
//! sort call emitted, plus metadata about the call. [`TraceRecorder`]
//! accumulates records while the sort runs (the engine uses one internally
//! when trace recording is enabled; it is also a [`StepObserver`], so a
//! caller can record through the live notification path instead).
//! [`TraceReplayer`] feeds a finished trace back into any observer, all at
//! once or one step at a time.
//!
//! Replay is idempotent: records are self-contained snapshots, so replaying
//! a trace twice — or rewinding and starting over — drives a display to the
//! same states in the same order. Traces live in memory only; persisting
//! them beyond a run is deliberately out of scope.
//!
//! # Example
//!
//! ```
//! use mvis_trace::{TraceRecorder, TraceReplayer};
//! use mvis_core::{Run, StepKind, StepRecord};
//!
//! let mut recorder = TraceRecorder::new(1, 10);
//! recorder.record(StepRecord::new(
//!     0,
//!     StepKind::Complete { result: Run::from_slice(&[1.0]) },
//! ));
//! let trace = recorder.finish(std::time::Duration::from_micros(3));
//!
//! let mut names = Vec::new();
//! let mut replayer = TraceReplayer::new(&trace);
//! replayer.replay_all(&mut |step: &StepRecord| names.push(step.kind_name()));
//! assert_eq!(names, ["complete"]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use mvis_core::{StepObserver, StepRecord};
use web_time::Duration;

/// Metadata about the sort call a trace was recorded from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceMeta {
    /// Length of the input sequence.
    pub input_len: usize,
    /// Run size the sort was configured with.
    pub run_size: usize,
    /// Wall-clock duration of the sort call, in nanoseconds.
    pub total_duration_ns: u64,
}

/// Per-kind step counts for a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KindCounts {
    pub split: usize,
    pub run_sorted: usize,
    pub merge_progress: usize,
    pub complete: usize,
}

/// The ordered, immutable step records of one sort call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepTrace {
    records: Vec<StepRecord>,
    meta: TraceMeta,
}

impl StepTrace {
    /// Assemble a trace from records and metadata.
    pub fn new(records: Vec<StepRecord>, meta: TraceMeta) -> Self {
        Self { records, meta }
    }

    /// The records in emission order.
    #[inline]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Metadata about the originating sort call.
    #[inline]
    pub fn meta(&self) -> &TraceMeta {
        &self.meta
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the trace holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Wall-clock duration of the sort call.
    pub fn total_duration(&self) -> Duration {
        Duration::from_nanos(self.meta.total_duration_ns)
    }

    /// Count records per kind.
    pub fn kind_counts(&self) -> KindCounts {
        let mut counts = KindCounts::default();
        for record in &self.records {
            match record.kind_name() {
                "split" => counts.split += 1,
                "run_sorted" => counts.run_sorted += 1,
                "merge_progress" => counts.merge_progress += 1,
                "complete" => counts.complete += 1,
                _ => {}
            }
        }
        counts
    }

    /// Consume the trace, yielding its records.
    pub fn into_records(self) -> Vec<StepRecord> {
        self.records
    }
}

/// Accumulates step records during a sort.
#[derive(Debug)]
pub struct TraceRecorder {
    records: Vec<StepRecord>,
    input_len: usize,
    run_size: usize,
}

impl TraceRecorder {
    /// Start recording for a sort over `input_len` values with the given
    /// run size.
    pub fn new(input_len: usize, run_size: usize) -> Self {
        Self {
            records: Vec::new(),
            input_len,
            run_size,
        }
    }

    /// Append one record.
    pub fn record(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    /// Number of records so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Seal the recording into an immutable trace.
    pub fn finish(self, total_duration: Duration) -> StepTrace {
        StepTrace::new(
            self.records,
            TraceMeta {
                input_len: self.input_len,
                run_size: self.run_size,
                total_duration_ns: total_duration.as_nanos() as u64,
            },
        )
    }
}

impl StepObserver for TraceRecorder {
    fn on_step(&mut self, step: &StepRecord) {
        self.record(step.clone());
    }
}

/// Feeds a recorded trace back into an observer.
///
/// The replayer holds a cursor into the trace. [`replay_next`](Self::replay_next)
/// delivers one record and advances; [`replay_all`](Self::replay_all) drains
/// the remainder; [`rewind`](Self::rewind) restarts from the beginning.
#[derive(Debug)]
pub struct TraceReplayer<'a> {
    trace: &'a StepTrace,
    cursor: usize,
}

impl<'a> TraceReplayer<'a> {
    /// Start a replay at the beginning of the trace.
    pub fn new(trace: &'a StepTrace) -> Self {
        Self { trace, cursor: 0 }
    }

    /// Current cursor position (number of records already delivered).
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Records not yet delivered.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.trace.len() - self.cursor
    }

    /// Deliver the next record, if any. Returns `false` once exhausted.
    pub fn replay_next(&mut self, observer: &mut dyn StepObserver) -> bool {
        match self.trace.records().get(self.cursor) {
            Some(record) => {
                observer.on_step(record);
                self.cursor += 1;
                true
            }
            None => false,
        }
    }

    /// Deliver every remaining record in order. Returns how many were
    /// delivered.
    pub fn replay_all(&mut self, observer: &mut dyn StepObserver) -> usize {
        let mut delivered = 0;
        while self.replay_next(observer) {
            delivered += 1;
        }
        delivered
    }

    /// Reset the cursor to the start of the trace.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}
