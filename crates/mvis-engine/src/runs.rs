#![forbid(unsafe_code)]

//! Run generation and per-run sorting: the leaf phase of the algorithm.

use mvis_core::{Generation, Run};

/// Partition a sequence into contiguous runs of at most `run_size` values.
///
/// The final run may be shorter; relative order within each run is
/// preserved and no value is duplicated or dropped. An empty input yields
/// an empty generation.
///
/// # Panics
///
/// Panics if `run_size` is zero. [`SortConfig::validate`](mvis_core::SortConfig::validate)
/// rejects that case before the engine gets here.
pub fn split_into_runs(values: &[f64], run_size: usize) -> Generation {
    assert!(run_size > 0, "run size must be positive");
    Generation::new(values.chunks(run_size).map(Run::from_slice).collect())
}

/// Sort one run in place into non-decreasing order.
///
/// Uses an unstable comparison sort over the total order of `f64`; equal
/// values may appear in any relative order. Empty and singleton runs are
/// no-ops.
pub fn sort_run(run: &mut Run) {
    run.values_mut().sort_unstable_by(f64::total_cmp);
}
