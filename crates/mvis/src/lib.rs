#![forbid(unsafe_code)]

//! MergeVis public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use mvis::prelude::*;
//!
//! let sorter = ExternalSorter::new();
//! let config = SortConfig::new().with_run_size(3);
//! let outcome = sorter
//!     .sort(&[5.0, 3.0, 8.0, 1.0, 9.0, 2.0], &config, &mut NullObserver)
//!     .unwrap();
//! assert_eq!(outcome.values, vec![1.0, 2.0, 3.0, 5.0, 8.0, 9.0]);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use mvis_core::{
    ConfigError, ControlHandle, DEFAULT_PAUSE_POLL, DEFAULT_RUN_SIZE, Generation, MergeSide,
    NullObserver, Run, SortConfig, StepKind, StepObserver, StepRecord,
};

// --- Engine re-exports -----------------------------------------------------

pub use mvis_engine::{
    ExternalSorter, GeneratorConfig, ProgressMap, SortOutcome, ValueMode, generate, sort_run,
    sort_unwatched, split_into_runs,
};

// --- Trace re-exports ------------------------------------------------------

pub use mvis_trace::{KindCounts, StepTrace, TraceMeta, TraceRecorder, TraceReplayer};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::{
        ControlHandle, ExternalSorter, MergeSide, NullObserver, Run, SortConfig, SortOutcome,
        StepKind, StepObserver, StepRecord, StepTrace, TraceReplayer,
    };
}
