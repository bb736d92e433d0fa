//! # Resource Estimator Benchmarks
//!
//! `estimate` is closed-form arithmetic; every domain should finish in well
//! under a microsecond.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qre_01_application_registry::{DomainKind, StaticRegistry};
use qre_02_resource_estimator::{
    format_compact, ParameterSet, ResourceEstimator, ResourceEstimatorApi,
};

fn bench_estimate_per_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("qre-02-estimate");
    let estimator = ResourceEstimator::new(Arc::new(StaticRegistry::new()));
    let params = ParameterSet::default();

    for kind in DomainKind::ALL {
        group.bench_with_input(BenchmarkId::new("by_id", kind.id()), &kind, |b, kind| {
            b.iter(|| black_box(estimator.estimate(kind.id(), black_box(&params))))
        });
    }

    group.finish();
}

fn bench_parameter_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("qre-02-sweep");
    let estimator = ResourceEstimator::new(Arc::new(StaticRegistry::new()));

    // The system-size slider range of a typical UI.
    let sweep: Vec<ParameterSet> = (1..=20)
        .map(|i| ParameterSet::default().with_system_size(100.0 * i as f64))
        .collect();

    group.throughput(Throughput::Elements(sweep.len() as u64));
    group.bench_function("fermi_hubbard_system_size", |b| {
        b.iter(|| {
            sweep
                .iter()
                .filter_map(|p| estimator.estimate_kind(DomainKind::FermiHubbard, p).ok())
                .map(|r| r.physical_qubits)
                .sum::<u64>()
        })
    });

    group.finish();
}

fn bench_format_compact(c: &mut Criterion) {
    let values = [999.0, 1_500.0, 2_300_000.0, 4_000_000_000.0];
    c.bench_function("format_compact", |b| {
        b.iter(|| {
            for v in values {
                black_box(format_compact(black_box(v)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_estimate_per_domain,
    bench_parameter_sweep,
    bench_format_compact
);
criterion_main!(benches);
