//! Throughput of the batch-means partitioner and the Durbin-Watson test.
//!
//! Run with:
//! ```bash
//! cargo bench --bench batch_means
//!
//! # Rayon-backed accumulation
//! cargo bench --bench batch_means --features parallel
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dispatch_analysis::preflight::durbin_watson_test;
use dispatch_analysis::statistics::batch_means;
use dispatch_analysis::MeasurementSeries;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};
use rand_xoshiro::Xoshiro256PlusPlus;

const DAYS: f64 = 365.0;

fn synthetic_series(n: usize) -> MeasurementSeries {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let response = Exp::new(100.0).unwrap();
    let times: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..DAYS)).collect();
    let values: Vec<f64> = (0..n).map(|_| response.sample(&mut rng)).collect();
    MeasurementSeries::new(times, values).unwrap()
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_means");
    for &n in &[10_000usize, 100_000, 1_000_000] {
        let series = synthetic_series(n);
        group.bench_with_input(BenchmarkId::new("daily", n), &series, |b, s| {
            b.iter(|| batch_means(black_box(s), 1.0, 0.0, DAYS).unwrap())
        });
    }
    group.finish();
}

fn bench_durbin_watson(c: &mut Criterion) {
    let series = synthetic_series(1_000_000);
    let hourly = batch_means(&series, 1.0 / 24.0, 0.0, DAYS).unwrap();

    c.bench_function("durbin_watson_hourly_year", |b| {
        b.iter(|| durbin_watson_test(black_box(&hourly.means)).unwrap())
    });
}

criterion_group!(benches, bench_partition, bench_durbin_watson);
criterion_main!(benches);
