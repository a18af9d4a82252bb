// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use parapet_algo::sort_vec;
use parapet_vec::{Cursor, ParapetVec};

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench cursor
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
// Checked traversal vs slice traversal
// =============================================================================

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal_sum");
    configure_group(&mut group);

    for size in [1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let mut v = ParapetVec::new();
        for i in 0..size {
            v.push_back(i as u64);
        }

        group.bench_with_input(BenchmarkId::new("slice", size), &v, |b, v| {
            b.iter(|| {
                let mut total = 0u64;
                for x in v.as_slice() {
                    total = total.wrapping_add(*x);
                }
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("checked_cursor", size), &v, |b, v| {
            b.iter(|| {
                let mut cur = v.cursor();
                let end = cur.to_end();
                let mut total = 0u64;
                while cur != end {
                    total = total.wrapping_add(cur.read().unwrap());
                    cur.advance().unwrap();
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Sort through checked cursors
// =============================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_sort");
    configure_group(&mut group);

    for size in [100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));

        let mut src = ParapetVec::new();
        for i in 0..size {
            // Descending input, worst case for insertion sort.
            src.push_back((size - i) as u64);
        }

        group.bench_with_input(BenchmarkId::new("sort_vec", size), &src, |b, src| {
            b.iter(|| {
                let mut v = src.clone();
                sort_vec(&mut v).unwrap();
                black_box(v)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traversal, bench_sort);
criterion_main!(benches);
