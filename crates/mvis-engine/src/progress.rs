#![forbid(unsafe_code)]

//! Advisory progress mapping.
//!
//! Percentages follow a fixed curve: 0 at start, 10 after the split, 30 to
//! 50 across the per-run sort phase, 50 to 90 across merge passes, 100 at
//! completion. The mapping is advisory, not a correctness contract, but
//! reports are guaranteed monotonically non-decreasing within one sort.

use mvis_core::StepObserver;

/// Percent reported once the split phase is done.
pub const SPLIT_DONE: f64 = 10.0;
/// Percent at the start of the per-run sort phase.
pub const SORT_PHASE_START: f64 = 30.0;
/// Percent at the start of the merge phase.
pub const MERGE_PHASE_START: f64 = 50.0;
/// Percent spanned by the merge phase.
const MERGE_PHASE_SPAN: f64 = 40.0;

/// Smallest number of bits covering `value`, i.e. `ceil(log2(value))`.
fn ceil_log2(value: usize) -> u32 {
    match value {
        0 | 1 => 0,
        v => (v - 1).ilog2() + 1,
    }
}

/// Estimated merge passes for the progress denominator.
///
/// Matches the curve's `ceil(log2(initial_runs + 1))`; one pass minimum so
/// a two-run sort still spans the merge range.
pub fn estimated_passes(initial_runs: usize) -> u32 {
    ceil_log2(initial_runs + 1).max(1)
}

/// Monotone progress reporter for one sort call.
#[derive(Debug)]
pub struct ProgressMap {
    estimated_passes: u32,
    last: f64,
}

impl ProgressMap {
    /// Start a fresh curve for a sort that split into `initial_runs` runs.
    pub fn new(initial_runs: usize) -> Self {
        Self {
            estimated_passes: estimated_passes(initial_runs),
            last: 0.0,
        }
    }

    /// Percent after sorting run `index` out of `total`.
    pub fn run_sorted(index: usize, total: usize) -> f64 {
        SORT_PHASE_START + (index as f64 / total as f64) * 20.0
    }

    /// Percent after merge pass `pass` (1-based).
    pub fn merge_pass(&self, pass: u32) -> f64 {
        MERGE_PHASE_START + (pass as f64 / self.estimated_passes as f64) * MERGE_PHASE_SPAN
    }

    /// Report a percent, clamped into `[0, 100]` and never below a previous
    /// report.
    pub fn report(&mut self, observer: &mut dyn StepObserver, percent: f64, message: &str) {
        let percent = percent.clamp(0.0, 100.0).max(self.last);
        self.last = percent;
        observer.on_progress(percent, message);
    }

    /// The last reported percent.
    pub fn last(&self) -> f64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvis_core::CollectingObserver;

    #[test]
    fn ceil_log2_small_values() {
        assert_eq!(ceil_log2(0), 0);
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(8), 3);
        assert_eq!(ceil_log2(9), 4);
    }

    #[test]
    fn estimated_passes_never_zero() {
        assert_eq!(estimated_passes(0), 1);
        assert_eq!(estimated_passes(1), 1);
        assert_eq!(estimated_passes(2), 2);
        assert_eq!(estimated_passes(7), 3);
    }

    #[test]
    fn run_sort_percents_stay_below_merge_start() {
        for total in 1..20usize {
            for index in 0..total {
                let p = ProgressMap::run_sorted(index, total);
                assert!((SORT_PHASE_START..MERGE_PHASE_START).contains(&p));
            }
        }
    }

    #[test]
    fn final_pass_reaches_ninety() {
        let map = ProgressMap::new(7);
        assert!((map.merge_pass(3) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn reports_are_monotone_and_clamped() {
        let mut observer = CollectingObserver::new();
        let mut map = ProgressMap::new(4);
        map.report(&mut observer, 10.0, "a");
        map.report(&mut observer, 5.0, "b");
        map.report(&mut observer, 250.0, "c");
        map.report(&mut observer, 99.0, "d");
        let percents: Vec<f64> = observer.progress.iter().map(|(p, _)| *p).collect();
        assert_eq!(percents, vec![10.0, 10.0, 100.0, 100.0]);
        assert_eq!(map.last(), 100.0);
    }
}
