#![forbid(unsafe_code)]

//! MergeVis Core
//!
//! Shared vocabulary for the MergeVis workspace: the run model produced by
//! the split phase, the step records the engine emits at every observable
//! transition, the cooperative pause/cancel control handle, and the sort
//! configuration.
//!
//! # Role in MergeVis
//! `mvis-core` is the leaf crate. `mvis-engine` drives the algorithm and
//! emits [`StepRecord`]s through a [`StepObserver`]; `mvis-trace` retains
//! and replays them. Nothing in this crate renders, parses bytes, or touches
//! a terminal — presentation is a downstream collaborator's concern.

pub mod config;
pub mod control;
pub mod error;
pub mod observer;
pub mod run;
pub mod step;

pub use config::{DEFAULT_PAUSE_POLL, DEFAULT_RUN_SIZE, SortConfig};
pub use control::ControlHandle;
pub use error::ConfigError;
#[cfg(any(test, feature = "test-helpers"))]
pub use observer::CollectingObserver;
pub use observer::{NullObserver, StepObserver};
pub use run::{Generation, Run};
pub use step::{MergeSide, StepKind, StepRecord};
