//! Benchmark for memoized wrappers: cold and warm calls, recursive descent,
//! and the mutex-guarded store.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use memolambda::memo::{Memo, RecursiveMemo, SyncMemo, memoize_recursive};
use std::hint::black_box;

fn fibonacci_step(recurse: &dyn Fn(u64) -> u64, n: u64) -> u64 {
    if n < 2 { n } else { recurse(n - 1) + recurse(n - 2) }
}

fn slow_sum(limit: u64) -> u64 {
    (0..limit).fold(0, |accumulator, index| accumulator ^ index.wrapping_mul(2_654_435_761))
}

// =============================================================================
// Unary Benchmarks
// =============================================================================

fn benchmark_memo_call(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memo_call");

    group.bench_function("cold", |bencher| {
        bencher.iter(|| {
            let memo = Memo::new(slow_sum);
            black_box(memo.call(black_box(1_000)))
        });
    });

    let warm = Memo::new(slow_sum);
    warm.call(1_000);
    group.bench_function("warm", |bencher| {
        bencher.iter(|| black_box(warm.call(black_box(1_000))));
    });

    group.bench_function("unmemoized", |bencher| {
        bencher.iter(|| black_box(slow_sum(black_box(1_000))));
    });

    group.finish();
}

// =============================================================================
// Recursive Benchmarks
// =============================================================================

fn benchmark_recursive(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("recursive_fibonacci");

    for n in [20_u64, 50, 90] {
        group.bench_with_input(BenchmarkId::new("cold", n), &n, |bencher, &n| {
            bencher.iter(|| {
                let fibonacci = memoize_recursive(fibonacci_step);
                black_box(fibonacci(black_box(n)))
            });
        });
    }

    let warm = RecursiveMemo::new(fibonacci_step);
    warm.call(90);
    group.bench_function("warm_90", |bencher| {
        bencher.iter(|| black_box(warm.call(black_box(90))));
    });

    group.finish();
}

// =============================================================================
// Sync Benchmarks
// =============================================================================

fn benchmark_sync(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sync_memo_call");

    let warm = SyncMemo::new(slow_sum);
    warm.call(1_000);
    group.bench_function("warm", |bencher| {
        bencher.iter(|| black_box(warm.call(black_box(1_000))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_memo_call, benchmark_recursive, benchmark_sync);
criterion_main!(benches);
