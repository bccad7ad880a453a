//! Benchmarks for the sort engine's step-emission overhead.
//!
//! Compares the full step-emitting engine against the unwatched quick path
//! on the same seeded dataset, at a run size large enough that merge
//! comparisons dominate.
//!
//! Run with: cargo bench -p mvis-engine --bench sort_bench

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use mvis_core::{NullObserver, SortConfig};
use mvis_engine::{ExternalSorter, GeneratorConfig, ValueMode, generate, sort_unwatched};

const DATASET_LEN: usize = 10_000;
const RUN_SIZE: usize = 64;

fn dataset() -> Vec<f64> {
    generate(&GeneratorConfig {
        count: DATASET_LEN,
        min: 0.0,
        max: 1.0e6,
        mode: ValueMode::Real,
        seed: Some(42),
    })
}

fn bench_engine_sort(c: &mut Criterion) {
    let values = dataset();
    let config = SortConfig::new().with_run_size(RUN_SIZE);
    c.bench_function("engine_sort_10k", |b| {
        b.iter(|| {
            let sorter = ExternalSorter::new();
            let outcome = sorter
                .sort(black_box(&values), &config, &mut NullObserver)
                .unwrap();
            black_box(outcome.values)
        })
    });
}

fn bench_engine_sort_with_trace(c: &mut Criterion) {
    let values = dataset();
    let config = SortConfig::new()
        .with_run_size(RUN_SIZE)
        .with_record_trace(true);
    c.bench_function("engine_sort_10k_recorded", |b| {
        b.iter(|| {
            let sorter = ExternalSorter::new();
            let outcome = sorter
                .sort(black_box(&values), &config, &mut NullObserver)
                .unwrap();
            black_box(outcome.trace)
        })
    });
}

fn bench_unwatched_sort(c: &mut Criterion) {
    let values = dataset();
    c.bench_function("unwatched_sort_10k", |b| {
        b.iter(|| black_box(sort_unwatched(black_box(&values), &mut NullObserver)))
    });
}

criterion_group!(
    benches,
    bench_engine_sort,
    bench_engine_sort_with_trace,
    bench_unwatched_sort
);
criterion_main!(benches);
