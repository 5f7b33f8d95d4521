//! Page planning and aggregation benchmarks.
//!
//! Run with: `cargo bench --package quakefetch-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quakefetch_bench::synthetic_batch;
use quakefetch_lib::{DateRange, aggregate, build_pages};
use std::hint::black_box;
use std::num::NonZeroU32;

fn planning_benchmark(c: &mut Criterion) {
    let range = DateRange::parse("2000-01-01", "2017-12-31").expect("valid range");
    let page_size = NonZeroU32::new(20_000).expect("non-zero");

    let mut group = c.benchmark_group("build_pages");
    for total in [25_000u64, 2_000_000, 20_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| build_pages(black_box(range), black_box(total), page_size));
        });
    }
    group.finish();
}

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    group.sample_size(20);

    for (name, pages, page_len) in [("10x2000", 10, 2_000), ("4x20000", 4, 20_000)] {
        let batch = synthetic_batch(pages, page_len, 5);
        group.throughput(Throughput::Elements((pages * page_len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &batch, |b, batch| {
            b.iter(|| aggregate(black_box(batch)));
        });
    }
    group.finish();
}

criterion_group!(benches, planning_benchmark, aggregate_benchmark);
criterion_main!(benches);
