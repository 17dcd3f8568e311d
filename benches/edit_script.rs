//! Edit script benchmark
//!
//! Measures the quadratic LCS diff and the linear reconstruction that every
//! oracle call pays for.
//!
//! # Run Instructions
//!
//! ```bash
//! cargo bench --bench edit_script
//! ```

use aislar::delta::{apply, coalesce_replacements, diff, order_by};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Base/target pair with roughly one edit every `stride` elements
fn versions(len: usize, stride: usize) -> (Vec<u32>, Vec<u32>) {
    let base: Vec<u32> = (0..len as u32).collect();
    let target = base
        .iter()
        .enumerate()
        .filter_map(|(i, &v)| match i % stride {
            0 => None,
            1 => Some(v + 100_000),
            _ => Some(v),
        })
        .collect();
    (base, target)
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    for len in [64usize, 256, 1024] {
        let (base, target) = versions(len, 8);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| diff(black_box(&base), black_box(&target)));
        });
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for len in [64usize, 256, 1024] {
        let (base, target) = versions(len, 8);
        let script = diff(&base, &target);
        let half: Vec<_> = script.iter().step_by(2).copied().collect();

        group.bench_with_input(BenchmarkId::new("full", len), &len, |b, _| {
            b.iter(|| apply(black_box(&base), black_box(&target), black_box(&script)));
        });
        group.bench_with_input(BenchmarkId::new("half", len), &len, |b, _| {
            b.iter(|| apply(black_box(&base), black_box(&target), black_box(&half)));
        });
    }

    group.finish();
}

fn bench_order_and_coalesce(c: &mut Criterion) {
    let (base, target) = versions(1024, 8);
    let script = diff(&base, &target);
    let reversed: Vec<_> = script.iter().rev().copied().collect();

    c.bench_function("order_by_reversed", |b| {
        b.iter(|| order_by(black_box(&reversed), black_box(&script)));
    });
    c.bench_function("coalesce_replacements", |b| {
        b.iter(|| coalesce_replacements(black_box(&script)));
    });
}

criterion_group!(benches, bench_diff, bench_apply, bench_order_and_coalesce);
criterion_main!(benches);
