//! Statistics and formatting benchmarks.
//!
//! The stat cards and every table cell are recomputed on each frame, so
//! `summarize` and `format_row` must stay cheap at dataset scale.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `stats/summarize` | All four cards (averages + medians) over 700 and 7k rows |
//! | `stats/format` | `format_number` on grouped integers and fixed-point values |
//! | `stats/format_row` | Formatting one page of table rows |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench stats_bench
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdu_core::stats::{format_number, format_row, summarize};
use mdu_core::Record;
use serde_json::json;
use std::hint::black_box;

fn rows(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            serde_json::from_value(json!({
                "User ID": i + 1,
                "Device Model": "Google Pixel 5",
                "Operating System": "Android",
                "App Usage Time (min/day)": 30.0 + (f * 7.0) % 570.0,
                "Screen On Time (hours/day)": 1.0 + (f * 0.37) % 11.0,
                "Battery Drain (mAh/day)": 300 + (i * 13) % 2700,
                "Number of Apps Installed": 10 + i % 90,
                "Data Usage (MB/day)": 100 + (i * 17) % 2400,
                "Age": 18 + i % 42,
                "Gender": "Male",
                "User Behavior Class": i % 5 + 1,
            }))
            .expect("row is a JSON object")
        })
        .collect()
}

fn summarize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats/summarize");
    for n in [700usize, 7_000] {
        let data = rows(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| black_box(summarize(data, false)))
        });
    }
    group.finish();
}

fn format_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats/format");
    group.bench_function("grouped_integer", |b| {
        b.iter(|| black_box(format_number(black_box(1_234_567.0), 0)))
    });
    group.bench_function("fixed_one_place", |b| {
        b.iter(|| black_box(format_number(black_box(4.35), 1)))
    });
    group.bench_function("fixed_zero_places_fraction", |b| {
        b.iter(|| black_box(format_number(black_box(2.5), 0)))
    });
    group.finish();
}

fn format_row_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats/format_row");
    let page = rows(40);
    group.throughput(Throughput::Elements(page.len() as u64));
    group.bench_function("page_of_40", |b| {
        b.iter(|| page.iter().map(format_row).collect::<Vec<_>>())
    });
    group.finish();
}

criterion_group!(benches, summarize_bench, format_bench, format_row_bench);
criterion_main!(benches);
