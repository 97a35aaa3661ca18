//! Criterion benchmarks for hot paths.
//!
//! Benchmarks:
//! 1. Sparkline path generation at typical and oversized series lengths
//! 2. Sample snapshot generation (full demo-mode refresh)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use coindeck_core::feed::{QuoteProvider, SampleProvider};
use coindeck_core::spark::path_points;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_samples(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

// ── 1. Sparkline Path Generation ─────────────────────────────────────

fn bench_path_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_points");

    // 168 is the live feed's seven-day hourly sparkline.
    for &len in &[24, 168, 1000] {
        let samples = make_samples(len);
        group.bench_with_input(BenchmarkId::new("series", len), &len, |b, _| {
            b.iter(|| path_points(black_box(&samples), black_box(40.0), black_box(8.0)));
        });
    }

    group.finish();
}

// ── 2. Sample Snapshot Generation ────────────────────────────────────

fn bench_sample_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_snapshot");

    let provider = SampleProvider::new(7);
    let ids: Vec<String> = ["bitcoin", "ethereum", "solana", "dogecoin"]
        .into_iter()
        .map(String::from)
        .collect();

    group.bench_function("four_coins", |b| {
        b.iter(|| provider.fetch(black_box(&ids), black_box("usd")));
    });

    group.finish();
}

criterion_group!(benches, bench_path_points, bench_sample_snapshot);
criterion_main!(benches);
