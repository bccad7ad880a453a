//! Recorded traces replay identically to the live step stream.

use mvis_core::{CollectingObserver, SortConfig, StepKind};
use mvis_engine::ExternalSorter;
use mvis_trace::TraceReplayer;

#[test]
fn replaying_a_recorded_sort_reproduces_the_live_stream() {
    let input = [5.0, 3.0, 8.0, 1.0, 9.0, 2.0, 7.0];
    let sorter = ExternalSorter::new();
    let mut live = CollectingObserver::new();
    let outcome = sorter
        .sort(
            &input,
            &SortConfig::new().with_run_size(3).with_record_trace(true),
            &mut live,
        )
        .unwrap();

    let trace = outcome.trace.expect("trace was requested");
    assert_eq!(trace.len(), live.steps.len());

    let mut replayed = CollectingObserver::new();
    let mut replayer = TraceReplayer::new(&trace);
    assert_eq!(replayer.replay_all(&mut replayed), live.steps.len());
    assert_eq!(replayed.steps, live.steps);
}

#[test]
fn replay_twice_yields_identical_streams() {
    let input = [9.0, 1.0, 8.0, 2.0, 7.0, 3.0];
    let sorter = ExternalSorter::new();
    let outcome = sorter
        .sort(
            &input,
            &SortConfig::new().with_run_size(2).with_record_trace(true),
            &mut mvis_core::NullObserver,
        )
        .unwrap();
    let trace = outcome.trace.unwrap();

    let mut first = CollectingObserver::new();
    let mut second = CollectingObserver::new();
    let mut replayer = TraceReplayer::new(&trace);
    replayer.replay_all(&mut first);
    replayer.rewind();
    replayer.replay_all(&mut second);
    assert_eq!(first.steps, second.steps);
}

#[test]
fn trace_meta_and_counts_describe_the_sort() {
    let input: Vec<f64> = (0..10).rev().map(|v| v as f64).collect();
    let sorter = ExternalSorter::new();
    let outcome = sorter
        .sort(
            &input,
            &SortConfig::new().with_run_size(4).with_record_trace(true),
            &mut mvis_core::NullObserver,
        )
        .unwrap();
    let trace = outcome.trace.unwrap();

    assert_eq!(trace.meta().input_len, 10);
    assert_eq!(trace.meta().run_size, 4);

    let counts = trace.kind_counts();
    assert_eq!(counts.split, 1);
    assert_eq!(counts.run_sorted, 3);
    assert_eq!(counts.complete, 1);
    assert!(counts.merge_progress > 0);

    // The trace ends with the completion step carrying the final result.
    match &trace.records().last().unwrap().kind {
        StepKind::Complete { result } => {
            assert_eq!(result.values(), outcome.values.as_slice());
        }
        other => panic!("expected complete, got {}", other.name()),
    }
}

#[test]
fn stepwise_replay_can_be_interleaved_with_inspection() {
    let input = [4.0, 2.0, 6.0, 1.0];
    let sorter = ExternalSorter::new();
    let outcome = sorter
        .sort(
            &input,
            &SortConfig::new().with_run_size(2).with_record_trace(true),
            &mut mvis_core::NullObserver,
        )
        .unwrap();
    let trace = outcome.trace.unwrap();

    let mut observer = CollectingObserver::new();
    let mut replayer = TraceReplayer::new(&trace);
    let mut delivered = 0;
    while replayer.replay_next(&mut observer) {
        delivered += 1;
        assert_eq!(replayer.position(), delivered);
        assert_eq!(observer.steps.len(), delivered);
    }
    assert_eq!(delivered, trace.len());
}
