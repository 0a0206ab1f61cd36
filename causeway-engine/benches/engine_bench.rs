use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use causeway_core::{CancellationToken, CausalAnalysisConfig, Dataset};
use causeway_discovery::DiscoveryEngine;
use causeway_engine::CausalAnalysisEngine;

fn bench_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("discovery");
    for samples in [50usize, 200] {
        let data = test_fixtures::engineering_scenario(samples, 1);
        let dataset = Dataset::new(&data);
        let engine = DiscoveryEngine::new(CausalAnalysisConfig::default());
        group.bench_with_input(BenchmarkId::from_parameter(samples), &dataset, |b, d| {
            b.iter(|| engine.discover(d, &CancellationToken::new()).unwrap());
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let mut group = c.benchmark_group("analyze");
    for samples in [50usize, 200] {
        let data = test_fixtures::engineering_scenario(samples, 1);
        let engine = CausalAnalysisEngine::with_defaults();
        group.bench_with_input(BenchmarkId::from_parameter(samples), &data, |b, d| {
            b.iter(|| runtime.block_on(engine.analyze(d)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_discovery, bench_full_pipeline);
criterion_main!(benches);
