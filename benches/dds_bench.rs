//! Criterion benchmarks for the DDS engine.
//!
//! Uses the built-in benchmark surfaces to measure pure algorithm
//! overhead; objective evaluation is cheap here, so timings are
//! dominated by the engine's own loop and perturbation work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dds_search::benchmarks::{ackley, griewank, rastrigin};
use dds_search::bounds::{Bounds, DecisionVariable};
use dds_search::dds::{standard_normal, DdsConfig, DdsRunner};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn continuous_bounds(dim: usize, lo: f64, hi: f64) -> Bounds {
    Bounds::new(
        (0..dim)
            .map(|i| DecisionVariable::continuous(format!("x{i}"), lo, hi))
            .collect(),
    )
}

fn bench_dds_rastrigin(c: &mut Criterion) {
    let mut group = c.benchmark_group("dds_rastrigin");
    group.sample_size(10);

    for &dim in &[10, 30, 100] {
        let bounds = continuous_bounds(dim, -5.12, 5.12);
        let config = DdsConfig::new(1000).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(bounds, config),
            |b, (bounds, config)| {
                b.iter(|| {
                    let result =
                        DdsRunner::run(&rastrigin, black_box(bounds), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_dds_griewank(c: &mut Criterion) {
    let mut group = c.benchmark_group("dds_griewank");
    group.sample_size(10);

    for &dim in &[10, 30] {
        let bounds = continuous_bounds(dim, -600.0, 600.0);
        let config = DdsConfig::new(1000).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(bounds, config),
            |b, (bounds, config)| {
                b.iter(|| {
                    let result = DdsRunner::run(&griewank, black_box(bounds), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_dds_ackley_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("dds_ackley_mixed");
    group.sample_size(10);

    // half continuous, half discrete variables
    for &dim in &[10, 30] {
        let vars = (0..dim)
            .map(|i| {
                if i % 2 == 0 {
                    DecisionVariable::continuous(format!("x{i}"), -32.0, 32.0)
                } else {
                    DecisionVariable::discrete(format!("k{i}"), -32, 32)
                }
            })
            .collect();
        let bounds = Bounds::new(vars);
        let config = DdsConfig::new(1000).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(bounds, config),
            |b, (bounds, config)| {
                b.iter(|| {
                    let result = DdsRunner::run(&ackley, black_box(bounds), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_standard_normal(c: &mut Criterion) {
    c.bench_function("standard_normal", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(standard_normal(&mut rng)))
    });
}

criterion_group!(
    benches,
    bench_dds_rastrigin,
    bench_dds_griewank,
    bench_dds_ackley_mixed,
    bench_standard_normal
);
criterion_main!(benches);
