//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Benchmarks cover:
//! - Single scheme steps (Euler vs predictor-corrector)
//! - Full European/Asian runs with varying path counts
//! - Sequential vs partitioned parallel runs

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::models::{GbmSde, ModelParameters};
use pricer_models::payoff::{call, flat_discount, put};
use pricer_pricing::mc::{
    AsianPricer, EuropeanPricer, ExecutionMode, MonteCarloConfig, PathPricer, SimulationHub,
};
use pricer_pricing::rng::{PricerRng, SeededStreams};
use pricer_pricing::scheme::{DiscretisationScheme, Scheme, SchemeKind};

fn gbm() -> Arc<GbmSde> {
    let params = ModelParameters::builder()
        .strike(65.0)
        .maturity(0.25)
        .rate(0.08)
        .volatility(0.3)
        .spot(60.0)
        .build()
        .unwrap();
    Arc::new(GbmSde::new(params).unwrap())
}

fn scheme(kind: SchemeKind, n_steps: usize) -> Scheme<GbmSde> {
    kind.build(gbm(), n_steps).unwrap()
}

/// Cost of one `next` call per scheme.
fn bench_scheme_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheme_step");

    for kind in [SchemeKind::Euler, SchemeKind::predictor_corrector()] {
        let scheme = scheme(kind, 1000);
        let dt = scheme.dt();
        group.bench_function(scheme.name(), |b| {
            let mut rng = PricerRng::from_seed(42);
            b.iter(|| {
                let z = rng.gen_normal();
                black_box(scheme.next(black_box(60.0), 0.1, dt, z, 0.0))
            });
        });
    }

    group.finish();
}

fn run_once<P: PathPricer>(scheme: &Scheme<GbmSde>, pricer: &mut P, config: MonteCarloConfig) -> f64 {
    pricer.reset();
    SimulationHub::builder()
        .scheme(scheme)
        .pricer(pricer)
        .config(config)
        .build()
        .unwrap()
        .run_with_mode(&SeededStreams::new(42))
        .unwrap()
        .price
}

/// Full runs with varying path counts.
fn bench_mc_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_pricing");
    group.sample_size(20);

    let n_steps = 100;
    let scheme = scheme(SchemeKind::predictor_corrector(), n_steps);
    let df = flat_discount(0.08, 0.25);

    for n_paths in [1_000, 10_000] {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("european_put", n_paths), &config, |b, cfg| {
            let mut pricer = EuropeanPricer::new(put(65.0), df);
            b.iter(|| black_box(run_once(&scheme, &mut pricer, cfg)));
        });

        group.bench_with_input(BenchmarkId::new("asian_call", n_paths), &config, |b, cfg| {
            let mut pricer = AsianPricer::new(call(65.0), df);
            b.iter(|| black_box(run_once(&scheme, &mut pricer, cfg)));
        });
    }

    group.finish();
}

/// Sequential vs parallel for a fixed workload.
fn bench_parallel_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_scaling");
    group.sample_size(10);

    let n_steps = 200;
    let scheme = scheme(SchemeKind::Euler, n_steps);
    let df = flat_discount(0.08, 0.25);
    let max_workers = rayon::current_num_threads().max(1);

    let mut modes = vec![("sequential", ExecutionMode::Sequential)];
    if max_workers > 1 {
        modes.push(("parallel", ExecutionMode::Parallel { workers: max_workers }));
    }

    for (label, mode) in modes {
        let config = MonteCarloConfig::builder()
            .n_paths(20_000)
            .n_steps(n_steps)
            .mode(mode)
            .build()
            .unwrap();
        group.bench_function(label, |b| {
            let mut pricer = EuropeanPricer::new(call(65.0), df);
            b.iter(|| black_box(run_once(&scheme, &mut pricer, config)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scheme_step,
    bench_mc_pricing,
    bench_parallel_scaling
);
criterion_main!(benches);
