#![forbid(unsafe_code)]

//! Streaming two-pointer merge of one run pair.
//!
//! The merge keeps a cursor into each source run. Before every comparison
//! it honors cancellation, then blocks while paused; after one cursor
//! exhausts its run, the other side is flushed without further comparisons
//! or suspension points. One `MergeProgress` step is emitted per
//! comparison.

use mvis_core::{ControlHandle, MergeSide, Run, StepKind};
use web_time::Duration;

/// Result of merging one pair.
#[derive(Debug)]
pub(crate) struct MergeOutcome {
    /// The merged run. Meaningful only when `cancelled` is false; a
    /// cancelled merge leaves a partial result the caller must discard.
    pub(crate) merged: Run,
    /// Whether cancellation interrupted the merge.
    pub(crate) cancelled: bool,
}

/// Merge `left` and `right` into a single sorted run.
///
/// The tie-break is exactly `left <= right`: equal values are taken from
/// the left run first, which approximates stability for already-ordered
/// equal runs. Changing it would reorder equal values across run
/// boundaries.
pub(crate) fn merge_pair(
    left: &Run,
    right: &Run,
    control: &ControlHandle,
    pause_poll: Duration,
    emit: &mut dyn FnMut(StepKind),
) -> MergeOutcome {
    let lv = left.values();
    let rv = right.values();
    let mut merged = Vec::with_capacity(lv.len() + rv.len());
    let mut i = 0;
    let mut j = 0;

    while i < lv.len() && j < rv.len() {
        if control.is_cancelled() || control.wait_while_paused(pause_poll) {
            return MergeOutcome {
                merged: Run::new(merged),
                cancelled: true,
            };
        }

        let took = if lv[i] <= rv[j] {
            merged.push(lv[i]);
            i += 1;
            MergeSide::Left
        } else {
            merged.push(rv[j]);
            j += 1;
            MergeSide::Right
        };

        emit(StepKind::MergeProgress {
            left: left.clone(),
            right: right.clone(),
            merged: merged.clone(),
            left_taken: i,
            right_taken: j,
            took,
        });
    }

    // One side is exhausted; the rest of the other copies over untouched.
    merged.extend_from_slice(&lv[i..]);
    merged.extend_from_slice(&rv[j..]);

    MergeOutcome {
        merged: Run::new(merged),
        cancelled: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_merge(left: &[f64], right: &[f64]) -> (MergeOutcome, Vec<StepKind>) {
        let control = ControlHandle::new();
        let mut steps = Vec::new();
        let outcome = merge_pair(
            &Run::from_slice(left),
            &Run::from_slice(right),
            &control,
            Duration::from_millis(1),
            &mut |kind| steps.push(kind),
        );
        (outcome, steps)
    }

    fn took_sides(steps: &[StepKind]) -> Vec<MergeSide> {
        steps
            .iter()
            .map(|kind| match kind {
                StepKind::MergeProgress { took, .. } => *took,
                other => panic!("unexpected step {}", other.name()),
            })
            .collect()
    }

    #[test]
    fn merges_two_sorted_runs_in_comparison_order() {
        // [3,5,8] vs [1,2,9]: right, right, left, left, left, then flush 9.
        let (outcome, steps) = collect_merge(&[3.0, 5.0, 8.0], &[1.0, 2.0, 9.0]);
        assert!(!outcome.cancelled);
        assert_eq!(outcome.merged.values(), &[1.0, 2.0, 3.0, 5.0, 8.0, 9.0]);
        assert_eq!(
            took_sides(&steps),
            vec![
                MergeSide::Right,
                MergeSide::Right,
                MergeSide::Left,
                MergeSide::Left,
                MergeSide::Left,
            ]
        );
    }

    #[test]
    fn emits_one_step_per_comparison_not_per_flush() {
        // Two comparisons resolve the left run; the right tail flushes
        // without steps.
        let (outcome, steps) = collect_merge(&[1.0, 2.0], &[3.0, 4.0, 5.0]);
        assert_eq!(outcome.merged.len(), 5);
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn tie_break_prefers_the_left_run() {
        let (outcome, steps) = collect_merge(&[2.0, 2.0], &[2.0]);
        assert_eq!(outcome.merged.values(), &[2.0, 2.0, 2.0]);
        // Both comparisons see 2.0 <= 2.0 and take left; the right value
        // flushes afterwards.
        assert_eq!(
            took_sides(&steps),
            vec![MergeSide::Left, MergeSide::Left]
        );
    }

    #[test]
    fn partial_result_grows_one_value_per_step() {
        let (_, steps) = collect_merge(&[1.0, 3.0], &[2.0, 4.0]);
        for (idx, kind) in steps.iter().enumerate() {
            match kind {
                StepKind::MergeProgress {
                    merged,
                    left_taken,
                    right_taken,
                    ..
                } => {
                    assert_eq!(merged.len(), idx + 1);
                    assert_eq!(left_taken + right_taken, idx + 1);
                }
                other => panic!("unexpected step {}", other.name()),
            }
        }
    }

    #[test]
    fn empty_left_flushes_right_without_steps() {
        let (outcome, steps) = collect_merge(&[], &[1.0, 2.0]);
        assert_eq!(outcome.merged.values(), &[1.0, 2.0]);
        assert!(steps.is_empty());
    }

    #[test]
    fn cancellation_stops_before_the_next_comparison() {
        let control = ControlHandle::new();
        let mut steps = 0usize;
        let emitter_control = control.clone();
        let outcome = merge_pair(
            &Run::from_slice(&[1.0, 3.0, 5.0]),
            &Run::from_slice(&[2.0, 4.0, 6.0]),
            &control,
            Duration::from_millis(1),
            &mut |_| {
                steps += 1;
                if steps == 2 {
                    emitter_control.cancel();
                }
            },
        );
        assert!(outcome.cancelled);
        assert_eq!(steps, 2);
        assert_eq!(outcome.merged.len(), 2);
    }

    #[test]
    fn already_cancelled_merge_emits_nothing() {
        let control = ControlHandle::new();
        control.cancel();
        let mut steps = 0usize;
        let outcome = merge_pair(
            &Run::from_slice(&[1.0]),
            &Run::from_slice(&[2.0]),
            &control,
            Duration::from_millis(1),
            &mut |_| steps += 1,
        );
        assert!(outcome.cancelled);
        assert_eq!(steps, 0);
        assert!(outcome.merged.is_empty());
    }
}
