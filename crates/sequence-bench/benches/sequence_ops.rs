//! Criterion micro-benchmarks for append, random access, copy and move.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sequence::Sequence;
use sequence_bench::{filled_sequence, random_indices, random_values};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Benchmark: append N values from default construction (doubling growth).
fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    for len in SIZES {
        let values = random_values(len, 42);
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| {
                let mut s = Sequence::new();
                for &v in values {
                    s.push_back(v);
                }
                black_box(s.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: append N values after a single up-front reserve.
fn bench_push_back_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_reserved");
    for len in SIZES {
        let values = random_values(len, 42);
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| {
                let mut s = Sequence::with_capacity(values.len());
                for &v in values {
                    s.push_back(v);
                }
                black_box(s.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: 10K random reads through checked indexing.
fn bench_random_index(c: &mut Criterion) {
    let s = filled_sequence(100_000, 7);
    let indices = random_indices(s.len(), 10_000, 7);
    c.bench_function("random_index_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &i in &indices {
                sum = sum.wrapping_add(s[i]);
            }
            black_box(sum);
        });
    });
}

/// Benchmark: deep copy vs. buffer transfer of a 100K-element sequence.
fn bench_copy_and_move(c: &mut Criterion) {
    let source = filled_sequence(100_000, 3);
    c.bench_function("clone_100k", |b| {
        b.iter(|| black_box(source.clone()));
    });

    let mut a = source.clone();
    c.bench_function("take_100k", |b| {
        b.iter(|| {
            let mut moved = a.take();
            black_box(moved.len());
            a.move_from(&mut moved);
        });
    });
}

/// Benchmark: shrink to empty and refill within the retained capacity.
fn bench_clear_refill(c: &mut Criterion) {
    let values = random_values(10_000, 11);
    let mut s = Sequence::with_capacity(values.len());
    c.bench_function("clear_refill_10k", |b| {
        b.iter(|| {
            s.clear();
            s.extend(values.iter().copied());
            black_box(s.back());
        });
    });
}

criterion_group!(
    benches,
    bench_push_back,
    bench_push_back_reserved,
    bench_random_index,
    bench_copy_and_move,
    bench_clear_refill
);
criterion_main!(benches);
