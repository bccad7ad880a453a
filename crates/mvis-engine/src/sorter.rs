#![forbid(unsafe_code)]

//! Top-level sort orchestration: split, sort runs, merge passes, complete.

use mvis_core::{
    ConfigError, ControlHandle, Generation, SortConfig, StepKind, StepObserver, StepRecord,
};
use mvis_trace::{StepTrace, TraceRecorder};
use tracing::debug;
use web_time::Instant;

use crate::merge::merge_pair;
use crate::progress::{MERGE_PHASE_START, ProgressMap, SORT_PHASE_START, SPLIT_DONE};
use crate::runs::{sort_run, split_into_runs};

/// Result of one sort call.
#[derive(Debug, Clone)]
pub struct SortOutcome {
    /// Every input value in non-decreasing order — freshly allocated, never
    /// aliasing the caller's input. After cancellation this is best-effort:
    /// the first run available at the cancellation point, whose sortedness
    /// is not guaranteed.
    pub values: Vec<f64>,
    /// Whether cancellation truncated the sort.
    pub cancelled: bool,
    /// The retained step trace, when the configuration asked for one.
    pub trace: Option<StepTrace>,
}

/// External (run-based) merge sort engine.
///
/// One engine instance owns one [`ControlHandle`]; clone it via
/// [`control`](Self::control) to pause, resume, or cancel from another
/// thread. A single instance must not be used for two concurrent
/// [`sort`](Self::sort) calls — the control flags are shared per instance,
/// and the behavior of overlapping calls is undefined.
#[derive(Debug, Default)]
pub struct ExternalSorter {
    control: ControlHandle,
}

impl ExternalSorter {
    /// Engine with a fresh control handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine driven through an existing control handle.
    pub fn with_control(control: ControlHandle) -> Self {
        Self { control }
    }

    /// A clone of the engine's control handle.
    pub fn control(&self) -> ControlHandle {
        self.control.clone()
    }

    /// Sort `input`, emitting step records through `observer`.
    ///
    /// The three phases run synchronously on the calling thread; the engine
    /// suspends after each emitted step until the observer returns, and
    /// while paused between merge comparisons. Control flags are cleared
    /// when the call starts, so a handle always addresses the current call.
    ///
    /// Inputs of length 0 or 1 return an equivalent copy immediately
    /// without emitting steps. An invalid configuration fails before any
    /// phase starts, with no steps emitted and no partial trace.
    pub fn sort(
        &self,
        input: &[f64],
        config: &SortConfig,
        observer: &mut dyn StepObserver,
    ) -> Result<SortOutcome, ConfigError> {
        config.validate()?;
        self.control.reset();
        let started = Instant::now();
        let n = input.len();

        if n <= 1 {
            debug!(len = n, "input trivially sorted");
            let trace = config
                .record_trace
                .then(|| TraceRecorder::new(n, config.run_size).finish(started.elapsed()));
            return Ok(SortOutcome {
                values: input.to_vec(),
                cancelled: false,
                trace,
            });
        }

        let mut recorder = config
            .record_trace
            .then(|| TraceRecorder::new(n, config.run_size));
        let initial_runs = n.div_ceil(config.run_size);
        let mut progress = ProgressMap::new(initial_runs);

        // Phase 1: split.
        progress.report(observer, 0.0, "starting sort");
        progress.report(observer, SPLIT_DONE, "splitting input into runs");
        let mut runs = split_into_runs(input, config.run_size);
        debug!(
            runs = runs.len(),
            run_size = config.run_size,
            "split phase complete"
        );
        emit(
            &started,
            &mut recorder,
            observer,
            StepKind::Split { runs: runs.clone() },
        );

        // Phase 2: sort each run left to right.
        progress.report(observer, SORT_PHASE_START, "sorting runs");
        let total = runs.len();
        for index in 0..total {
            if self.control.is_cancelled() {
                break;
            }
            sort_run(&mut runs.runs_mut()[index]);
            progress.report(
                observer,
                ProgressMap::run_sorted(index, total),
                &format!("sorting run {}/{total}", index + 1),
            );
            emit(
                &started,
                &mut recorder,
                observer,
                StepKind::RunSorted {
                    runs: runs.clone(),
                    active_run: index,
                },
            );
        }

        // Phase 3: pairwise merge passes.
        progress.report(observer, MERGE_PHASE_START, "merging runs");
        let mut pass = 0u32;
        'passes: while runs.len() > 1 && !self.control.is_cancelled() {
            pass += 1;
            debug!(pass, runs = runs.len(), "merge pass started");
            let mut next = Vec::with_capacity(runs.len().div_ceil(2));
            let current = runs.runs();
            let mut index = 0;
            while index < current.len() {
                if self.control.is_cancelled() {
                    break 'passes;
                }
                if index + 1 < current.len() {
                    let outcome = merge_pair(
                        &current[index],
                        &current[index + 1],
                        &self.control,
                        config.pause_poll,
                        &mut |kind| emit(&started, &mut recorder, observer, kind),
                    );
                    if outcome.cancelled {
                        // Partial merge output is discarded, along with any
                        // completed pairs of the interrupted pass.
                        break 'passes;
                    }
                    next.push(outcome.merged);
                } else {
                    // Unpaired trailing run passes through to the next
                    // generation without a merge step.
                    next.push(current[index].clone());
                }
                let percent = progress.merge_pass(pass);
                progress.report(observer, percent, &format!("merge pass {pass}"));
                index += 2;
            }
            runs = Generation::new(next);
        }

        // Phase 4: completion.
        let cancelled = self.control.is_cancelled();
        let result = runs.first().cloned().unwrap_or_default();
        progress.report(
            observer,
            100.0,
            if cancelled {
                "sort cancelled"
            } else {
                "sort complete"
            },
        );
        emit(
            &started,
            &mut recorder,
            observer,
            StepKind::Complete {
                result: result.clone(),
            },
        );
        debug!(len = result.len(), pass, cancelled, "sort finished");

        Ok(SortOutcome {
            values: result.into_values(),
            cancelled,
            trace: recorder.map(|r| r.finish(started.elapsed())),
        })
    }
}

/// Stamp and deliver one step: into the trace recorder when one is active,
/// then to the live observer. The engine does not proceed until the
/// observer returns.
fn emit(
    started: &Instant,
    recorder: &mut Option<TraceRecorder>,
    observer: &mut dyn StepObserver,
    kind: StepKind,
) {
    let record = StepRecord::new(started.elapsed().as_nanos() as u64, kind);
    if let Some(recorder) = recorder {
        recorder.record(record.clone());
    }
    observer.on_step(&record);
}

/// Sort without visualization: the quick path for callers that only want
/// the result. Reports 0% and 100% progress and emits no steps.
pub fn sort_unwatched(input: &[f64], observer: &mut dyn StepObserver) -> Vec<f64> {
    observer.on_progress(0.0, "starting sort");
    let mut values = input.to_vec();
    values.sort_unstable_by(f64::total_cmp);
    observer.on_progress(100.0, "sort complete");
    values
}
