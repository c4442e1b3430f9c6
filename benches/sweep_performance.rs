use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sidereal_visibility::{
    AltitudeTerms, CelestialObject, EquatorialCoordinate, GeographicCoordinate, Observatory,
    Strategy, SweepConfig, is_ever_visible, visibility_intervals_with_config,
};
use std::hint::black_box;

fn observatory() -> Observatory {
    Observatory::new("Alert", GeographicCoordinate::new(80.5, 2.53).unwrap())
}

fn polaris() -> CelestialObject {
    CelestialObject::new("Polaris", EquatorialCoordinate::new(10.0, 80.5).unwrap())
}

fn benchmark_altitude_evaluation(c: &mut Criterion) {
    let terms = AltitudeTerms::new(80.5_f64.to_radians(), 80.5_f64.to_radians());

    c.bench_function("altitude_single", |b| {
        b.iter(|| terms.altitude_at(black_box(0.25)))
    });

    c.bench_function("visibility_gate", |b| {
        let site = observatory();
        let target = polaris();
        b.iter(|| is_ever_visible(black_box(&site), black_box(&target), black_box(89.5)))
    });
}

fn benchmark_sweep_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_resolution");
    let site = observatory();
    let target = polaris();

    for &step in &[1e-2, 1e-3, sidereal_visibility::PRECISION_STEP] {
        // Samples per rotation
        let samples = (std::f64::consts::TAU / step) as u64;
        group.throughput(Throughput::Elements(samples));

        let config = SweepConfig::new(step).unwrap();
        group.bench_with_input(BenchmarkId::new("sweep", samples), &config, |b, config| {
            b.iter(|| {
                visibility_intervals_with_config(
                    black_box(&site),
                    black_box(&target),
                    black_box(89.5),
                    config,
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    let site = observatory();
    let target = polaris();

    for strategy in [Strategy::Sweep, Strategy::Analytic] {
        let config = SweepConfig::standard().with_strategy(strategy);
        group.bench_with_input(
            BenchmarkId::new("standard", format!("{strategy:?}")),
            &config,
            |b, config| {
                b.iter(|| {
                    visibility_intervals_with_config(
                        black_box(&site),
                        black_box(&target),
                        black_box(89.5),
                        config,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_altitude_evaluation,
    benchmark_sweep_resolution,
    benchmark_strategies
);
criterion_main!(benches);
