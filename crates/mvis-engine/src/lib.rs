#![forbid(unsafe_code)]

//! MergeVis Engine
//!
//! External (run-based) merge sort over an in-memory numeric sequence,
//! emitting a deterministic, replayable stream of step records for
//! pedagogical display.
//!
//! The algorithm runs in three ordered phases: split the input into
//! fixed-size runs, sort each run independently, then pairwise-merge runs
//! pass by pass until one remains. Every phase transition and every merge
//! comparison yields a [`StepRecord`](mvis_core::StepRecord) through the
//! caller's [`StepObserver`](mvis_core::StepObserver); the caller may
//! pause, resume, or cancel between merge comparisons through a
//! [`ControlHandle`](mvis_core::ControlHandle).
//!
//! "External" refers to the run-based structure of the algorithm; the
//! engine operates entirely in memory. Disk paging, parallel merging, and
//! k-way merges are out of scope.
//!
//! # Role in MergeVis
//! `mvis-engine` is the orchestrator. It consumes the run model and control
//! primitives from `mvis-core`, emits step records through the observer
//! seam, and records them into an `mvis-trace` trace on request.

pub mod generate;
pub mod merge;
pub mod progress;
pub mod runs;
pub mod sorter;

pub use generate::{GeneratorConfig, ValueMode, generate};
pub use progress::ProgressMap;
pub use runs::{sort_run, split_into_runs};
pub use sorter::{ExternalSorter, SortOutcome, sort_unwatched};
