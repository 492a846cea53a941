//! Criterion benchmarks for pricer_models.
//!
//! Benchmarks cover:
//! - GBM price ensemble generation across path counts
//! - Log-return ensemble generation
//! - Black-Scholes closed-form pricing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::BlackScholes;
use pricer_models::models::{PathSimulator, SimulationParameters};

fn params(n_paths: usize) -> SimulationParameters {
    SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 252, n_paths).unwrap()
}

/// Benchmark full-grid path generation for both variants.
fn bench_path_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gbm_paths");
    group.sample_size(20);

    for n_paths in [100, 1_000, 10_000] {
        let p = params(n_paths);

        group.bench_with_input(BenchmarkId::new("price", n_paths), &p, |b, p| {
            let mut sim = PathSimulator::from_seed(42);
            b.iter(|| black_box(sim.generate(black_box(p)).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("log_return", n_paths), &p, |b, p| {
            let mut sim = PathSimulator::from_seed(42);
            b.iter(|| black_box(sim.generate_log_returns(black_box(p)).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("terminal_only", n_paths), &p, |b, p| {
            let mut sim = PathSimulator::from_seed(42);
            b.iter(|| black_box(sim.generate_terminal(black_box(p)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the closed-form price.
fn bench_black_scholes(c: &mut Criterion) {
    let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    c.bench_function("black_scholes_call", |b| {
        b.iter(|| black_box(bs.price_call(black_box(100.0), black_box(1.0)).unwrap()));
    });
}

criterion_group!(benches, bench_path_generation, bench_black_scholes);
criterion_main!(benches);
