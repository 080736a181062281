//! Criterion micro-benchmarks for coordinate space operations.

use criterion::{criterion_group, criterion_main, Criterion};
use cubit_bench::{checkerboard_space, scattered_batch};
use cubit_core::{Extent, Position};
use cubit_space::{is_out_of_bounds, neighbours, BatchPolicy};
use std::hint::black_box;

/// Benchmark: neighbour cube of side 3 for every cell of a 20³ frame.
fn bench_neighbours_side3(c: &mut Criterion) {
    c.bench_function("neighbours_side3_8k", |b| {
        b.iter(|| {
            for z in 1..=20i64 {
                for y in 1..=20i64 {
                    for x in 1..=20i64 {
                        let n = neighbours(Position::new(x, y, z), 3);
                        black_box(&n);
                    }
                }
            }
        });
    });
}

/// Benchmark: one side-21 neighbour cube (9260 cells).
fn bench_neighbours_side21(c: &mut Criterion) {
    c.bench_function("neighbours_side21", |b| {
        b.iter(|| black_box(neighbours(Position::new(11, 11, 11), 21)));
    });
}

/// Benchmark: 10K-entry placement batch, ignoring invalid entries.
fn bench_place_batch_10k(c: &mut Criterion) {
    let batch = scattered_batch(10_000, 32);
    c.bench_function("place_batch_10k", |b| {
        b.iter(|| {
            let mut space = checkerboard_space(32);
            let report = space
                .place_with_report(batch.iter().copied(), BatchPolicy::IgnoreInvalid)
                .unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: bounds check over a 10K-position sequence.
fn bench_bounds_sequence_10k(c: &mut Criterion) {
    let extent = Extent::cube(32).unwrap();
    let positions: Vec<Position> = scattered_batch(10_000, 30)
        .into_iter()
        .map(|(p, _)| p)
        .filter(|p| extent.contains(p))
        .collect();
    c.bench_function("bounds_sequence_10k", |b| {
        b.iter(|| black_box(is_out_of_bounds(&positions, &extent)));
    });
}

/// Benchmark: is_empty over every cell of a dense 32³ space.
fn bench_is_empty_dense(c: &mut Criterion) {
    let space = checkerboard_space(32);
    c.bench_function("is_empty_dense_32k", |b| {
        b.iter(|| {
            let mut void = 0usize;
            for z in 1..=32i64 {
                for y in 1..=32i64 {
                    for x in 1..=32i64 {
                        if space.is_empty(&Position::new(x, y, z)) {
                            void += 1;
                        }
                    }
                }
            }
            black_box(void)
        });
    });
}

criterion_group!(
    benches,
    bench_neighbours_side3,
    bench_neighbours_side21,
    bench_place_batch_10k,
    bench_bounds_sequence_10k,
    bench_is_empty_dense,
);
criterion_main!(benches);
