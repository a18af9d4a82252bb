// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use parapet_vec::ParapetVec;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench vec
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs ParapetVec
// =============================================================================

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("ParapetVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = ParapetVec::new();
                for i in 0..s {
                    vec.push_back(i as u64);
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_push_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front");
    configure_group(&mut group);

    for size in [100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec::insert(0)", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.insert(0, i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("ParapetVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = ParapetVec::new();
                for i in 0..s {
                    vec.push_front(i as u64);
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_insert_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_middle");
    configure_group(&mut group);

    for size in [100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ParapetVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = ParapetVec::new();
                for i in 0..s {
                    let mid = vec.begin().add(vec.len() / 2);
                    vec.insert(mid, i as u64).unwrap();
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    configure_group(&mut group);

    for size in [1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let mut src = ParapetVec::new();
        for i in 0..size {
            src.push_back(i as u64);
        }

        group.bench_with_input(BenchmarkId::new("ParapetVec", size), &src, |b, src| {
            b.iter(|| black_box(src.clone()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_push_front,
    bench_insert_middle,
    bench_clone
);
criterion_main!(benches);
